//! Line-oriented menu over any `BufRead` input and `Write` output.
//!
//! Every command runs to completion before the next choice is read. Failed
//! commands print their error and are dropped; EOF behaves like quit.

use std::io::{self, BufRead, Write};

use pool_core::matching::{RideRequest, SearchOutcome, SelectionStrategy};
use pool_core::model::Itinerary;
use pool_core::{PoolError, RidePool, Selection};
use tracing::debug;

use crate::command::{self, MenuChoice};

pub struct Repl<R, W> {
    pool: RidePool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(pool: RidePool, input: R, output: W) -> Self {
        Self {
            pool,
            input,
            output,
        }
    }

    pub fn pool(&self) -> &RidePool {
        &self.pool
    }

    pub fn into_parts(self) -> (RidePool, W) {
        (self.pool, self.output)
    }

    /// Run until quit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output, "Exiting...")?;
                return Ok(());
            };
            let Some(choice) = MenuChoice::parse(&choice) else {
                writeln!(self.output, "Invalid choice")?;
                continue;
            };
            debug!(?choice, "menu command");
            match choice {
                MenuChoice::AddUser => self.add_user()?,
                MenuChoice::AddVehicle => self.add_vehicle()?,
                MenuChoice::OfferRide => self.offer_ride()?,
                MenuChoice::SelectRide => self.select_ride()?,
                MenuChoice::EndRide => self.end_ride()?,
                MenuChoice::PrintStats => self.print_stats()?,
                MenuChoice::PrintRides => self.print_rides()?,
                MenuChoice::FindRoutes => self.find_routes()?,
                MenuChoice::Quit => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "==============MENU================")?;
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, choice.label())?;
        }
        writeln!(self.output, "==================================")?;
        writeln!(self.output)
    }

    /// Print `label` and read one line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn report(&mut self, error: &PoolError) -> io::Result<()> {
        writeln!(self.output, "Error: {error}")
    }

    fn add_user(&mut self) -> io::Result<()> {
        let Some(line) = self.prompt("Enter user details in Format :: [Name, Gender, Age] : ")?
        else {
            return Ok(());
        };
        match command::parse_user(&line) {
            Ok(user) => {
                let user = self.pool.add_user(&user.name, &user.gender, user.age);
                writeln!(
                    self.output,
                    "User added: {} ({}, {})",
                    user.name, user.gender, user.age
                )
            }
            Err(error) => self.report(&error),
        }
    }

    fn add_vehicle(&mut self) -> io::Result<()> {
        let Some(line) =
            self.prompt("Enter vehicle details in Format :: [Owner, Model, License Plate] : ")?
        else {
            return Ok(());
        };
        match command::parse_vehicle(&line) {
            Ok(vehicle) => {
                let vehicle = self
                    .pool
                    .add_vehicle(&vehicle.owner, &vehicle.model, &vehicle.plate);
                writeln!(self.output, "Vehicle added for {}: {vehicle}", vehicle.owner)
            }
            Err(error) => self.report(&error),
        }
    }

    fn offer_ride(&mut self) -> io::Result<()> {
        let Some(line) = self.prompt(
            "Enter ride details ([Driver_Name], Origin=..., Available Seats=..., Vehicle=..., [NumberPlate], Destination=...): ",
        )?
        else {
            return Ok(());
        };
        match command::parse_offer(&line).and_then(|offer| self.pool.offer_ride(&offer)) {
            Ok(id) => {
                let summary = self
                    .pool
                    .ride_summaries(false)
                    .into_iter()
                    .find(|summary| summary.id == id);
                match summary {
                    Some(summary) => writeln!(self.output, "Ride offered: {summary}"),
                    None => writeln!(self.output, "Ride offered: #{id}"),
                }
            }
            Err(error) => self.report(&error),
        }
    }

    /// Read the five select-ride prompts; `None` at end of input.
    fn read_request(&mut self) -> io::Result<Option<Result<RideRequest, PoolError>>> {
        let mut answers = Vec::with_capacity(5);
        for label in [
            "Enter User: ",
            "Enter source: ",
            "Enter destination: ",
            "Enter number of seats: ",
            "Enter selection strategy (Most Vacant/Preferred Vehicle=...): ",
        ] {
            match self.prompt(label)? {
                Some(answer) => answers.push(answer),
                None => return Ok(None),
            }
        }
        Ok(Some(command::parse_u32("seats", &answers[3]).map(|seats| {
            RideRequest {
                rider: answers[0].trim().to_string(),
                origin: answers[1].trim().to_string(),
                destination: answers[2].trim().to_string(),
                seats,
                strategy: SelectionStrategy::parse(&answers[4]),
            }
        })))
    }

    fn select_ride(&mut self) -> io::Result<()> {
        let request = match self.read_request()? {
            None => return Ok(()),
            Some(Err(error)) => return self.report(&error),
            Some(Ok(request)) => request,
        };
        match self.pool.select_or_discover(&request) {
            Ok(Selection::Direct(id)) => writeln!(self.output, "Selected Ride id is:: {id}"),
            Ok(Selection::Itineraries(outcome)) if outcome.itineraries.is_empty() => {
                writeln!(
                    self.output,
                    "No rides found from {} to {}",
                    request.origin, request.destination
                )?;
                self.print_limits_note(&outcome)
            }
            Ok(Selection::Itineraries(outcome)) => {
                writeln!(self.output, "No direct ride. POSSIBLE RIDES")?;
                self.print_itineraries(&outcome.itineraries)?;
                self.print_limits_note(&outcome)?;
                self.book_itinerary(&request, &outcome.itineraries)
            }
            Err(error) => self.report(&error),
        }
    }

    fn book_itinerary(
        &mut self,
        request: &RideRequest,
        itineraries: &[Itinerary],
    ) -> io::Result<()> {
        let Some(answer) = self.prompt("Enter itinerary number to book (blank to skip): ")?
        else {
            return Ok(());
        };
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(());
        }
        let chosen = command::parse_u32("itinerary number", answer).and_then(|number| {
            (number as usize)
                .checked_sub(1)
                .and_then(|index| itineraries.get(index))
                .ok_or_else(|| PoolError::invalid_number("itinerary number", answer))
        });
        let reserved = chosen.and_then(|itinerary| {
            self.pool
                .reserve_itinerary(&request.rider, &itinerary.ride_ids(), request.seats)
        });
        match reserved {
            Ok(itinerary) => writeln!(self.output, "Booked itinerary: {itinerary}"),
            Err(error) => self.report(&error),
        }
    }

    fn end_ride(&mut self) -> io::Result<()> {
        let Some(line) = self.prompt("Enter ride ID to end: ")? else {
            return Ok(());
        };
        match command::parse_i64("ride id", &line).and_then(|id| self.pool.end_ride(id)) {
            Ok(ride) => writeln!(
                self.output,
                "Ride ended: #{} {} -> {}",
                ride.id, ride.origin, ride.destination
            ),
            Err(error) => self.report(&error),
        }
    }

    fn print_stats(&mut self) -> io::Result<()> {
        writeln!(self.output, "==============RIDE STATS================")?;
        for line in self.pool.stats_summaries() {
            writeln!(self.output, "{line}")?;
        }
        writeln!(self.output, "========================================")
    }

    fn print_rides(&mut self) -> io::Result<()> {
        writeln!(self.output, "=========EXISTING RIDES=============")?;
        for line in self.pool.ride_summaries(false) {
            writeln!(self.output, "{line}")?;
        }
        writeln!(self.output, "{}", self.pool.totals())
    }

    fn find_routes(&mut self) -> io::Result<()> {
        let mut answers = Vec::with_capacity(3);
        for label in ["Enter source: ", "Enter destination: ", "Enter number of seats: "] {
            match self.prompt(label)? {
                Some(answer) => answers.push(answer),
                None => return Ok(()),
            }
        }
        let seats = match command::parse_u32("seats", &answers[2]) {
            Ok(seats) => seats,
            Err(error) => return self.report(&error),
        };
        let outcome =
            match self
                .pool
                .find_possible_rides(answers[0].trim(), answers[1].trim(), seats)
            {
                Ok(outcome) => outcome,
                Err(error) => return self.report(&error),
            };
        if outcome.itineraries.is_empty() {
            writeln!(self.output, "No itineraries found")?;
        } else {
            self.print_itineraries(&outcome.itineraries)?;
        }
        self.print_limits_note(&outcome)
    }

    /// Tell the user when a search limit hid itineraries that may exist.
    fn print_limits_note(&mut self, outcome: &SearchOutcome) -> io::Result<()> {
        if outcome.capped {
            writeln!(
                self.output,
                "(showing the first {}, more may exist)",
                outcome.itineraries.len()
            )?;
        }
        if outcome.hop_pruned > 0 {
            writeln!(
                self.output,
                "(routes longer than {} rides were not searched)",
                self.pool.config().search.max_hops
            )?;
        }
        Ok(())
    }

    fn print_itineraries(&mut self, itineraries: &[Itinerary]) -> io::Result<()> {
        for (index, itinerary) in itineraries.iter().enumerate() {
            writeln!(self.output, "{}. {itinerary}", index + 1)?;
        }
        Ok(())
    }
}
