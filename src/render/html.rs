//! HTML rendering for balance reports
//!
//! Writes a `<table>` with a header row and one body row per report row.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::report::BalanceReport;

/// Render a balance report as an HTML table
pub fn render_html<W: Write>(report: &BalanceReport, writer: &mut W) -> TallyResult<()> {
    let write = |w: &mut W, line: &str| -> TallyResult<()> {
        writeln!(w, "{}", line).map_err(|e| TallyError::Render(e.to_string()))
    };

    write(writer, "<table class=\"table\">")?;
    write(writer, "  <thead>")?;
    write(writer, "    <tr>")?;
    for heading in ["ACCOUNT", "DESCRIPTION", "DEBIT", "CREDIT", "BALANCE"] {
        write(writer, &format!("      <th>{}</th>", heading))?;
    }
    write(writer, "    </tr>")?;
    write(writer, "  </thead>")?;
    write(writer, "  <tbody>")?;

    for row in &report.rows {
        write(writer, "    <tr>")?;
        write(
            writer,
            &format!("      <th scope=\"row\">{}</th>", row.account),
        )?;
        write(
            writer,
            &format!("      <td>{}</td>", escape_html(&row.description)),
        )?;
        write(writer, &format!("      <td>{}</td>", row.debit))?;
        write(writer, &format!("      <td>{}</td>", row.credit))?;
        write(writer, &format!("      <td>{}</td>", row.balance))?;
        write(writer, "    </tr>")?;
    }

    write(writer, "  </tbody>")?;
    write(writer, "</table>")?;

    Ok(())
}

/// Escape text content for HTML
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
