//! Interactive menu loop for evfleet
//!
//! [`Console`] owns the fleet for the duration of a session and dispatches
//! menu commands to the [`FleetService`]. Input and output are generic so the
//! loop runs the same against a terminal or in-memory buffers.

use crate::config::ReportConfig;
use crate::error::Result;
use crate::fleet::FleetService;
use crate::logging::{StructuredLogger, get_logger};
use crate::render;
use crate::vehicle::Vehicle;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;

mod command;

pub use command::MenuCommand;

/// Interactive session over one fleet
pub struct Console<R, W> {
    input: R,
    output: W,
    fleet: Vec<Vehicle>,
    service: FleetService,
    report: ReportConfig,
    logger: StructuredLogger,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(
        input: R,
        output: W,
        fleet: Vec<Vehicle>,
        service: FleetService,
        report: ReportConfig,
    ) -> Self {
        let logger = get_logger("console");
        Self {
            input,
            output,
            fleet,
            service,
            report,
            logger,
        }
    }

    /// The fleet as it stands after the commands dispatched so far
    pub fn fleet(&self) -> &[Vehicle] {
        &self.fleet
    }

    /// End the session, handing back the fleet and the output sink
    pub fn into_parts(self) -> (Vec<Vehicle>, W) {
        (self.fleet, self.output)
    }

    /// Prompt, read and dispatch until the operator exits or input ends
    pub fn run(&mut self) -> Result<()> {
        self.logger.info(&format!(
            "Interactive session started with {} vehicles",
            self.fleet.len()
        ));

        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };

            match line.parse::<MenuCommand>() {
                Ok(cmd) => {
                    if self.dispatch(cmd)?.is_break() {
                        break;
                    }
                }
                Err(e) => {
                    self.logger.warn(&e.to_string());
                    writeln!(
                        self.output,
                        "Unknown option '{}'. Please choose 1-6.",
                        line.trim()
                    )?;
                }
            }
            writeln!(self.output)?;
        }

        writeln!(self.output, "Goodbye.")?;
        self.output.flush()?;
        self.logger.info("Interactive session ended");
        Ok(())
    }

    /// Execute one command and write its result
    pub fn dispatch(&mut self, cmd: MenuCommand) -> Result<ControlFlow<()>> {
        self.logger.debug(&format!("Dispatching '{}'", cmd));
        let width = self.report.column_width;

        match cmd {
            MenuCommand::List => {
                let vehicles = self.service.list_all(&self.fleet);
                let lines = if vehicles.is_empty() {
                    vec![render::empty_fleet_notice()]
                } else {
                    render::vehicle_lines(vehicles, width)
                };
                self.write_section("Electric Vehicle Fleet", &lines)?;
            }
            MenuCommand::LowBattery => {
                let threshold = self.service.thresholds().low_battery;
                let low = self.service.low_battery(&self.fleet);
                let lines = if low.is_empty() {
                    vec![render::no_low_battery_notice(threshold)]
                } else {
                    render::vehicle_lines(low, width)
                };
                let title = format!("Low Battery (< {}%)", render::format_percent(threshold));
                self.write_section(&title, &lines)?;
            }
            MenuCommand::GoodChargeBrands => {
                let threshold = self.service.thresholds().good_charge;
                let brands = self.service.brands_with_good_charge(&self.fleet);
                let lines = if brands.is_empty() {
                    vec![render::no_good_charge_notice(threshold)]
                } else {
                    render::brand_lines(&brands)
                };
                let title = format!(
                    "Brands with Good Charge (> {}%)",
                    render::format_percent(threshold)
                );
                self.write_section(&title, &lines)?;
            }
            MenuCommand::TotalConsumption => {
                let total = self.service.total_consumption_per_km(&self.fleet);
                self.write_section(
                    "Total Fleet Consumption",
                    &[render::total_consumption_line(total)],
                )?;
            }
            MenuCommand::ChargeOne => {
                let line = match self.service.charge_first_needy(&mut self.fleet) {
                    Some(vehicle) => render::charged_line(vehicle),
                    None => render::fully_charged_notice(),
                };
                self.write_section("Charge", &[line])?;
            }
            MenuCommand::Exit => return Ok(ControlFlow::Break(())),
        }

        Ok(ControlFlow::Continue(()))
    }

    fn print_menu(&mut self) -> Result<()> {
        let thresholds = self.service.thresholds();
        let low = render::format_percent(thresholds.low_battery);
        let good = render::format_percent(thresholds.good_charge);
        writeln!(self.output, "=== EV Fleet Manager ===")?;
        writeln!(self.output, "1. List all vehicles")?;
        writeln!(self.output, "2. Vehicles with low battery (< {}%)", low)?;
        writeln!(self.output, "3. Brands with good charge (> {}%)", good)?;
        writeln!(self.output, "4. Total consumption per km")?;
        writeln!(self.output, "5. Charge first vehicle in need")?;
        writeln!(self.output, "6. Exit")?;
        write!(self.output, "Select an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Next line of input, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn write_section<S: AsRef<str>>(&mut self, title: &str, lines: &[S]) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", render::section_header(title))?;
        for line in lines {
            writeln!(self.output, "{}", line.as_ref())?;
        }
        Ok(())
    }
}
