//! CLI command implementations

pub mod books;
pub mod clients;
pub mod loans;
pub mod session;

use serde::Serialize;

use library_admin::{models::Page, AppError, AppResult};

pub use books::BookCommand;
pub use clients::ClientCommand;
pub use loans::LoanCommand;

/// Turn a failed command into the message shown to the librarian.
pub fn report(error: AppError) -> anyhow::Error {
    match error {
        AppError::Validation(fields) => {
            let lines: Vec<String> = fields
                .iter()
                .map(|(field, message)| format!("  {}: {}", field, message))
                .collect();
            anyhow::anyhow!("The form has errors:\n{}", lines.join("\n"))
        }
        AppError::AuthRejected(reason) => anyhow::anyhow!(
            "Session rejected ({}). Sign in again with `library-admin login`.",
            reason
        ),
        other => other.into(),
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn print_pager<T>(page: &Page<T>) {
    let hint = if page.has_next() {
        format!("  (next: --page {})", page.number + 1)
    } else {
        String::new()
    };
    println!(
        "Page {} of {}, {} total{}",
        page.number + 1,
        page.total_pages.max(1),
        page.total_elements,
        hint
    );
}

pub(crate) fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}
