use anyhow::Result;
use inquire::Text;

use helpdesk_core::{STATUS_CANCELLED, STATUS_COMPLETED, STATUS_IN_PROGRESS, STATUS_NEW};

/// Reads the menu choice as free text so unrecognized input falls through to
/// the "invalid choice" branch instead of being rejected at the prompt.
pub fn prompt_menu_choice() -> Result<String> {
    Ok(Text::new("Choose an action:").prompt()?)
}

/// Prompts for the fields of a new request: applicant, category, description.
pub fn prompt_new_request() -> Result<(String, String, String)> {
    let applicant = Text::new("Applicant name:").prompt()?;
    let category = Text::new("Category (Hardware/Software/Network):").prompt()?;
    let description = Text::new("Problem description:").prompt()?;
    Ok((applicant, category, description))
}

/// Prompts for a request id. Returns None when the input is not a number.
pub fn prompt_request_id() -> Result<Option<i32>> {
    let input = Text::new("Request id:").prompt()?;
    Ok(input.trim().parse().ok())
}

/// Prompts for the new status, executor, and comment. The listed statuses
/// are hints; any text is accepted.
pub fn prompt_status_update() -> Result<(String, String, String)> {
    let hint = format!(
        "New status ({}/{}/{}/{}):",
        STATUS_NEW, STATUS_IN_PROGRESS, STATUS_COMPLETED, STATUS_CANCELLED
    );
    let status = Text::new(&hint).prompt()?;
    let executor = Text::new("Executor:").prompt()?;
    let comment = Text::new("Comment:").prompt()?;
    Ok((status, executor, comment))
}

pub fn prompt_applicant_query() -> Result<String> {
    Ok(Text::new("Applicant name to search for:").prompt()?)
}

pub fn prompt_status_query() -> Result<String> {
    Ok(Text::new("Status to filter by:").prompt()?)
}
