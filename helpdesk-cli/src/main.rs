mod display;
mod prompts;

use anyhow::Result;
use colored::Colorize;

use helpdesk_core::{RequestRepository, RequestService, Storage};

const REQUESTS_FILE: &str = "requests.json";

fn main() -> Result<()> {
    let storage = Storage::new(REQUESTS_FILE);
    let mut service = RequestService::new(RequestRepository::new());
    service.load_from(&storage)?;

    println!("{}", "=== IT Department Request Tracker ===".bold());

    loop {
        println!();
        print_menu();
        let choice = prompts::prompt_menu_choice()?;

        match choice.trim() {
            "1" => create_new_request(&mut service)?,
            "2" => display::display_all_requests(service.all_requests()),
            "3" => update_request_status(&mut service)?,
            "4" => search_by_applicant(&service)?,
            "5" => filter_by_status(&service)?,
            "6" => {
                service.save_to(&storage)?;
                println!("{}", "Data saved.".green());
            }
            "0" => {
                service.save_to(&storage)?;
                println!("{}", "Data saved. Goodbye!".green());
                break;
            }
            _ => println!("{}", "Invalid choice. Try again.".red()),
        }
    }

    Ok(())
}

fn print_menu() {
    println!("1. Create a new request");
    println!("2. Show all requests");
    println!("3. Update request status");
    println!("4. Find requests by applicant");
    println!("5. Filter requests by status");
    println!("6. Save data");
    println!("0. Exit");
}

fn create_new_request(service: &mut RequestService) -> Result<()> {
    let (applicant, category, description) = prompts::prompt_new_request()?;
    let id = service.create_request(&applicant, &description, &category);
    println!(
        "{}",
        format!("Request #{} created successfully!", id).green()
    );
    Ok(())
}

fn update_request_status(service: &mut RequestService) -> Result<()> {
    let Some(id) = prompts::prompt_request_id()? else {
        println!("{}", "Invalid id.".red());
        return Ok(());
    };

    let (status, executor, comment) = prompts::prompt_status_update()?;
    if service.update_request_status(id, &status, &executor, &comment) {
        println!("Request #{} status changed to '{}'", id, status.cyan());
    } else {
        println!("{}", format!("Request with id {} not found.", id).yellow());
    }
    Ok(())
}

fn search_by_applicant(service: &RequestService) -> Result<()> {
    let name_part = prompts::prompt_applicant_query()?;
    display::display_search_results(&name_part, &service.search_by_applicant(&name_part));
    Ok(())
}

fn filter_by_status(service: &RequestService) -> Result<()> {
    let status = prompts::prompt_status_query()?;
    display::display_filter_results(&status, &service.filter_by_status(&status));
    Ok(())
}
