//! Plain-text drawing of a [`BookSnapshot`].

use std::fmt::Write;

use crate::book::BookSnapshot;
use crate::domain::Field;

pub fn render(snapshot: &BookSnapshot) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_form(&mut out, snapshot);
    let _ = write_table(&mut out, snapshot);
    let _ = write_pages(&mut out, snapshot);
    out
}

fn write_form(out: &mut String, snapshot: &BookSnapshot) -> std::fmt::Result {
    match snapshot.form.editing_id() {
        Some(id) => writeln!(out, "Editing contact {id}")?,
        None => writeln!(out, "New contact")?,
    }
    for field in Field::ALL {
        writeln!(out, "  {:<6} {}", field, snapshot.form.fields().get(field))?;
        if let Some(message) = snapshot.errors.get(field) {
            writeln!(out, "         ! {message}")?;
        }
    }
    writeln!(out, "  [{}]", snapshot.mode.label())?;
    writeln!(out)?;
    writeln!(out, "Search: {}", snapshot.query.search_term())
}

fn write_table(out: &mut String, snapshot: &BookSnapshot) -> std::fmt::Result {
    writeln!(out, "{:<3} {:<8} {:<20} {:<24} {:<14} Image", "#", "Id", "Name", "Email", "Phone")?;
    for (index, contact) in snapshot.visible.iter().enumerate() {
        writeln!(
            out,
            "{:<3} {:<8} {:<20} {:<24} {:<14} {}",
            index + 1,
            contact.id,
            contact.name,
            contact.email,
            contact.phone,
            contact.image
        )?;
    }
    Ok(())
}

fn write_pages(out: &mut String, snapshot: &BookSnapshot) -> std::fmt::Result {
    let current = snapshot.query.current_page();
    let pages: Vec<String> = (1..=snapshot.page_count)
        .map(|page| {
            if page == current {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect();
    writeln!(out, "Pages: {}  ({} contacts)", pages.join(" "), snapshot.total)
}
