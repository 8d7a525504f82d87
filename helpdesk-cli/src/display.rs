use colored::Colorize;

use helpdesk_core::Request;

/// Renders one request as a plain-text card. Colour goes on the section
/// headers in the callers, not here, so the card stays assertable in tests.
pub fn format_request(request: &Request) -> String {
    let mut out = String::new();
    out.push_str(&format!("Id: {}\n", request.id));
    out.push_str(&format!(
        "Date: {}\n",
        request.created_date.format("%d.%m.%Y %H:%M")
    ));
    out.push_str(&format!("Applicant: {}\n", request.applicant_name));
    out.push_str(&format!("Category: {}\n", request.category));
    out.push_str(&format!("Description: {}\n", request.description));
    out.push_str(&format!("Status: {}\n", request.status));
    out.push_str(&format!("Executor: {}\n", request.executor_name));
    if !request.executor_comment.is_empty() {
        out.push_str(&format!("Comment: {}\n", request.executor_comment));
    }
    if let Some(completed) = request.completed_date {
        out.push_str(&format!("Completed: {}\n", completed.format("%d.%m.%Y")));
    }
    out.push_str("---");
    out
}

pub fn display_request(request: &Request) {
    println!("{}", format_request(request));
}

pub fn display_all_requests(requests: &[Request]) {
    if requests.is_empty() {
        println!("{}", "No requests yet.".yellow());
        return;
    }

    println!("\n{}", "=== All requests ===".bold());
    for request in requests {
        display_request(request);
    }
}

pub fn display_search_results(name_part: &str, requests: &[&Request]) {
    if requests.is_empty() {
        println!(
            "{}",
            format!("No requests found for '{}'.", name_part).yellow()
        );
        return;
    }

    println!(
        "\n{}",
        format!("=== Requests for '{}' ===", name_part).bold()
    );
    for request in requests {
        display_request(request);
    }
}

pub fn display_filter_results(status: &str, requests: &[&Request]) {
    if requests.is_empty() {
        println!(
            "{}",
            format!("No requests with status '{}'.", status).yellow()
        );
        return;
    }

    println!(
        "\n{}",
        format!("=== Requests with status '{}' ===", status).bold()
    );
    for request in requests {
        display_request(request);
    }
}
