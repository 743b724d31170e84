//! Static HTML rendering of the current view.
//!
//! Produces the same element structure the viewer models: a tab strip,
//! a picker panel with its dropdown toggles and result tables, and a
//! matrix panel with one collapsible table per service. Exactly one of
//! the two panels lacks the `hidden` attribute.

use std::fmt::{self, Write as _};
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::data::lookup::{service_matrix, LookupError, PickerSection, RatingCell, PICKER_COLUMNS};
use crate::data::model::Dataset;
use crate::state::{options, Dimension, ServiceId, Tab, ViewState};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("formatting HTML")]
    Format(#[from] fmt::Error),
}

pub fn render_document(
    dataset: &Dataset,
    view: &ViewState,
    results: &[PickerSection],
) -> Result<String, ExportError> {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n");
    out.push_str("<title>Levels of Service</title>\n</head>\n<body>\n");
    out.push_str("<div id=\"los-container\">\n");
    render_tabs(&mut out, view)?;
    render_picker(&mut out, dataset, view, results)?;
    render_matrix(&mut out, dataset, view)?;
    out.push_str("</div>\n</body>\n</html>\n");
    Ok(out)
}

/// Render and write the document to `path`.
pub fn write_document(
    path: &Path,
    dataset: &Dataset,
    view: &ViewState,
    results: &[PickerSection],
) -> Result<()> {
    let html = render_document(dataset, view, results).context("rendering HTML")?;
    std::fs::write(path, html).with_context(|| format!("writing {}", path.display()))
}

fn hidden(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " hidden"
    }
}

fn render_tabs(out: &mut String, view: &ViewState) -> fmt::Result {
    out.push_str("<ul class=\"nav nav-tabs nav-justified\" id=\"los-tabs\">\n");
    for tab in Tab::ALL {
        let active = if view.is_panel_visible(tab) { " active" } else { "" };
        writeln!(
            out,
            "<li class=\"nav-item\"><a class=\"nav-link{active}\" data-tab=\"{}\">{}</a></li>",
            tab.panel_id(),
            escape_text(tab.title())
        )?;
    }
    out.push_str("</ul>\n");
    Ok(())
}

fn render_picker(
    out: &mut String,
    dataset: &Dataset,
    view: &ViewState,
    results: &[PickerSection],
) -> fmt::Result {
    writeln!(
        out,
        "<div id=\"{}\" class=\"tab-content\"{}>",
        Tab::Picker.panel_id(),
        hidden(view.is_panel_visible(Tab::Picker))
    )?;
    out.push_str("<div class=\"col-12 picker\">\n");
    for dimension in Dimension::ALL {
        let show = if view.is_dropdown_open(dimension) { " show" } else { "" };
        out.push_str("<div class=\"dropdown\">\n");
        writeln!(
            out,
            "<button class=\"btn btn-primary dropdown-toggle\" id=\"{}\">{}</button>",
            dimension.element_id(),
            escape_text(&view.dropdown_label(dimension))
        )?;
        writeln!(out, "<div class=\"dropdown-menu{show}\">")?;
        for choice in options(dimension, dataset) {
            writeln!(
                out,
                "<a class=\"dropdown-item\" href=\"#\">{}</a>",
                escape_text(&choice.label())
            )?;
        }
        out.push_str("</div>\n</div>\n");
    }
    out.push_str("</div>\n<hr>\n<div id=\"results-container\" class=\"col-12\">\n");
    for section in results {
        writeln!(
            out,
            "<div class=\"row\"><h3>{}</h3></div>",
            escape_text(&section.title)
        )?;
        out.push_str("<div class=\"row\">\n<table class=\"table\">\n<tr>");
        for column in PICKER_COLUMNS {
            write!(out, "<th>{column}</th>")?;
        }
        out.push_str("</tr>\n");
        for row in &section.rows {
            writeln!(
                out,
                "<tr><td>{}</td>{}</tr>",
                escape_text(&row.service),
                cell_html(&row.cell)
            )?;
        }
        out.push_str("</table>\n</div>\n");
    }
    out.push_str("</div>\n</div>\n");
    Ok(())
}

fn render_matrix(out: &mut String, dataset: &Dataset, view: &ViewState) -> Result<(), ExportError> {
    writeln!(
        out,
        "<div id=\"{}\" class=\"tab-content\"{}>",
        Tab::Matrix.panel_id(),
        hidden(view.is_panel_visible(Tab::Matrix))
    )?;
    out.push_str("<div class=\"row\">\n");
    for (section_idx, section) in dataset.sections.iter().enumerate() {
        out.push_str("<div class=\"col-12\">\n");
        if section_idx > 0 {
            out.push_str("<hr>\n");
        }
        writeln!(
            out,
            "<div class=\"row\"><h3>{}</h3></div>\n<div>",
            escape_text(&section.title)
        )?;
        for (service_idx, service) in section.services.iter().enumerate() {
            let id = ServiceId {
                section: section_idx,
                service: service_idx,
            };
            let expanded = view.is_service_expanded(id);
            let anchor = escape_text(&service.anchor());
            let active = if expanded { " active" } else { "" };
            out.push_str("<div class=\"row\">\n");
            writeln!(
                out,
                "<h5><button type=\"button\" data-target-dropdown=\"{anchor}\" \
                 class=\"btn btn-outline-secondary{active}\">{}</button>{}</h5>",
                view.service_toggle_label(id),
                escape_text(&service.name)
            )?;
            writeln!(
                out,
                "<table id=\"{anchor}\" class=\"table los-table\"{}>",
                hidden(expanded)
            )?;

            let table = service_matrix(dataset, service)?;
            out.push_str("<tr>");
            for heading in &table.header {
                write!(out, "<th>{}</th>", escape_text(heading))?;
            }
            out.push_str("</tr>\n");
            for row in &table.rows {
                write!(out, "<tr><th scope=\"row\">{}</th>", row.file_type)?;
                for cell in &row.cells {
                    out.push_str(&cell_html(cell));
                }
                out.push_str("</tr>\n");
            }
            out.push_str("</table>\n</div>\n");
        }
        out.push_str("</div>\n</div>\n");
    }
    out.push_str("</div>\n</div>\n");
    Ok(())
}

fn cell_html(cell: &RatingCell) -> String {
    format!(
        "<td class=\"{}\">{}</td>",
        cell.severity.css_class(),
        escape_text(&cell.label)
    )
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
