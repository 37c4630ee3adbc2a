//! Interactive front desk menu
//!
//! One `Select` loop over the desk operations. Operation errors are printed
//! and the loop continues; only terminal-level failures abort the session.

use std::path::Path;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use dialoguer::{Input, Select};

use frontdesk::{storage, Config, Guest, Hotel, Reservation, Room};

use crate::theme;

pub fn run(hotel: &mut Hotel, config: &Config) -> Result<()> {
    println!("{} - Front Desk", hotel.name());

    let items = vec![
        "[1] Add room",
        "[2] Add guest",
        "[3] Make reservation",
        "[4] Check in",
        "[5] Check out",
        "[6] View available rooms",
        "[7] View all reservations",
        "[8] Add service to reservation",
        "[9] Save data",
        "[10] Load data",
        "[0] Quit",
    ];

    loop {
        println!();
        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(0)
            .interact()?;

        let outcome = match selection {
            0 => add_room(hotel),
            1 => add_guest(hotel),
            2 => make_reservation(hotel),
            3 => check_in(hotel),
            4 => check_out(hotel),
            5 => view_available_rooms(hotel),
            6 => view_reservations(hotel),
            7 => add_service(hotel),
            8 => save_data(hotel, config),
            9 => load_data(hotel, config),
            _ => break,
        };

        if let Err(err) = outcome {
            println!("{}", theme::error(&err.to_string()));
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn add_room(hotel: &mut Hotel) -> Result<()> {
    let number: String = Input::new().with_prompt("Room number").interact_text()?;
    let room_type: String = Input::new().with_prompt("Room type").interact_text()?;
    let price: f64 = Input::new()
        .with_prompt("Price per night")
        .interact_text()?;

    hotel.add_room(Room::new(number.as_str(), room_type.as_str(), price))?;
    println!("{}", theme::success(&format!("Room {number} added")));
    Ok(())
}

fn add_guest(hotel: &mut Hotel) -> Result<()> {
    let guest_id: String = Input::new().with_prompt("Guest ID").interact_text()?;
    let name: String = Input::new().with_prompt("Guest name").interact_text()?;
    let email: String = Input::new().with_prompt("Guest email").interact_text()?;
    let phone: String = Input::new().with_prompt("Guest phone").interact_text()?;

    hotel.add_guest(Guest::new(
        guest_id.as_str(),
        name.as_str(),
        email.as_str(),
        phone.as_str(),
    ))?;
    println!("{}", theme::success(&format!("Guest {guest_id} added")));
    Ok(())
}

fn make_reservation(hotel: &mut Hotel) -> Result<()> {
    let guest_id: String = Input::new().with_prompt("Guest ID").interact_text()?;
    let room_number: String = Input::new().with_prompt("Room number").interact_text()?;
    let check_in: NaiveDate = Input::new()
        .with_prompt("Check-in date (YYYY-MM-DD)")
        .interact_text()?;
    let check_out: NaiveDate = Input::new()
        .with_prompt("Check-out date (YYYY-MM-DD)")
        .interact_text()?;

    let reservation = hotel
        .make_reservation(&guest_id, &room_number, check_in, check_out)?
        .clone();
    println!("{}", theme::success("Reservation created:"));
    println!("{}", render_reservation(hotel, &reservation));
    Ok(())
}

fn check_in(hotel: &mut Hotel) -> Result<()> {
    let reservation_id: String = Input::new().with_prompt("Reservation ID").interact_text()?;

    hotel.check_in(&reservation_id)?;
    println!(
        "{}",
        theme::success(&format!("Reservation {reservation_id} checked in"))
    );
    Ok(())
}

fn check_out(hotel: &mut Hotel) -> Result<()> {
    let reservation_id: String = Input::new().with_prompt("Reservation ID").interact_text()?;

    let reservation = hotel.check_out(&reservation_id)?;
    println!(
        "{}",
        theme::success(&format!("Reservation {reservation_id} checked out"))
    );
    println!("Total charges: ${:.2}", reservation.total_charges);
    Ok(())
}

fn view_available_rooms(hotel: &Hotel) -> Result<()> {
    let today = Local::now().date_naive();
    let tomorrow = today.succ_opt().unwrap_or(today);

    let check_in = prompt_date_or("Check-in date (YYYY-MM-DD, empty for today)", today)?;
    let check_out = prompt_date_or("Check-out date (YYYY-MM-DD, empty for tomorrow)", tomorrow)?;

    println!("\nAvailable rooms from {check_in} to {check_out}:");
    let rooms = hotel.available_rooms(check_in, check_out);
    if rooms.is_empty() {
        println!("No rooms available for these dates.");
    }
    for room in rooms {
        println!("{room}");
    }
    Ok(())
}

fn view_reservations(hotel: &Hotel) -> Result<()> {
    println!("\nAll reservations:");
    if hotel.reservations().is_empty() {
        println!("No reservations yet.");
    }
    for reservation in hotel.reservations() {
        println!("{}", render_reservation(hotel, reservation));
        println!("{}", "-".repeat(50));
    }
    Ok(())
}

fn add_service(hotel: &mut Hotel) -> Result<()> {
    let reservation_id: String = Input::new().with_prompt("Reservation ID").interact_text()?;
    let service_name: String = Input::new().with_prompt("Service name").interact_text()?;
    let price: f64 = Input::new().with_prompt("Service price").interact_text()?;

    hotel.add_service(&reservation_id, service_name.as_str(), price)?;
    println!(
        "{}",
        theme::success(&format!(
            "Service '{service_name}' added to reservation {reservation_id}"
        ))
    );
    Ok(())
}

fn save_data(hotel: &Hotel, config: &Config) -> Result<()> {
    let filename: String = Input::new()
        .with_prompt("Save to file")
        .default(config.storage.data_file.display().to_string())
        .interact_text()?;

    storage::save(hotel, Path::new(&filename))?;
    println!("{}", theme::success(&format!("Data saved to {filename}")));
    Ok(())
}

fn load_data(hotel: &mut Hotel, config: &Config) -> Result<()> {
    let filename: String = Input::new()
        .with_prompt("Load from file")
        .default(config.storage.data_file.display().to_string())
        .interact_text()?;

    let path = Path::new(&filename);
    if !path.exists() {
        println!("{}", theme::warning(&format!("File {filename} not found")));
        return Ok(());
    }

    // Replace the in-memory state only once the whole file loaded cleanly.
    *hotel = storage::load(path)?;
    println!("{}", theme::success(&format!("Data loaded from {filename}")));
    Ok(())
}

/// Prompt for a date, falling back to `default` on empty input
fn prompt_date_or(prompt: &str, default: NaiveDate) -> Result<NaiveDate> {
    let raw: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse()
        .map_err(|_| anyhow::anyhow!("invalid date '{raw}', expected YYYY-MM-DD"))
}

/// Human-readable summary with the guest resolved through the registry
fn render_reservation(hotel: &Hotel, reservation: &Reservation) -> String {
    let guest_name = hotel
        .guest(&reservation.guest_id)
        .map(|g| g.name.as_str())
        .unwrap_or(reservation.guest_id.as_str());

    format!(
        "Reservation {}: {} in Room {}\nCheck-in: {}, Check-out: {}\nStatus: {}, {}\nTotal Charges: ${:.2}",
        reservation.reservation_id,
        guest_name,
        reservation.room_number,
        reservation.check_in_date,
        reservation.check_out_date,
        if reservation.is_checked_in {
            "Checked in"
        } else {
            "Not checked in"
        },
        if reservation.is_checked_out {
            "Checked out"
        } else {
            "Not checked out"
        },
        reservation.total_charges
    )
}
