//! Host simulator for interface bring-up.
//!
//! Runs one `make_new` call against the simulated radio and prints the
//! resulting driver trace, the active bus configuration and the handle.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin netif-sim -- 1 pin_dat=GP4 div_int=3
//! cargo run --bin netif-sim -- --board "Raspberry Pi Pico 2 W" --json interface=0
//! cargo run --bin netif-sim -- --list-boards
//! ```
//!
//! Options:
//! - `--board <name>`: board table to use (default: the compiled-in board)
//! - `--id <16 hex digits>`: device identifier (default: host machine id)
//! - `--json`: print the report as JSON
//! - `--list-boards`: dump every board table as JSON and exit
//!
//! Remaining arguments are `key=value` keywords or a bare interface selector.

#![cfg(not(target_os = "espidf"))]

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = host::run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

mod host {
    use cyw43_netif::board::{BoardConfig, BOARDS};
    use cyw43_netif::identity::{FixedDeviceId, MachineDeviceId, UniqueDeviceId};
    use cyw43_netif::sim::{DriverCall, SimInterface, SimRadio, SimRegistry};
    use cyw43_netif::{
        ApCredentials, ArgValue, Capabilities, ClockDivisor, DeviceIdSource, InterfaceController,
        PinBinding,
    };
    use log::{info, warn};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Report {
        board: &'static str,
        capabilities: Capabilities,
        handle: SimInterface,
        credentials: ApCredentials,
        active_pins: PinBinding,
        active_clock: ClockDivisor,
        bus_hz: Option<u32>,
        calls: Vec<DriverCall>,
    }

    struct Options {
        board: &'static BoardConfig,
        id: Option<UniqueDeviceId>,
        json: bool,
        list_boards: bool,
        positional: Vec<ArgValue>,
        keywords: Vec<(String, ArgValue)>,
    }

    fn parse_options(args: &[String]) -> Result<Options, Box<dyn std::error::Error>> {
        let mut options = Options {
            board: BoardConfig::active(),
            id: None,
            json: false,
            list_boards: false,
            positional: Vec::new(),
            keywords: Vec::new(),
        };

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--board" => {
                    let name = iter.next().ok_or("--board needs a value")?;
                    options.board = BoardConfig::lookup(name)
                        .ok_or_else(|| format!("unknown board '{}'", name))?;
                }
                "--id" => {
                    let hex = iter.next().ok_or("--id needs a value")?;
                    options.id = Some(UniqueDeviceId::from_hex(hex)?);
                }
                "--json" => options.json = true,
                "--list-boards" => options.list_boards = true,
                other => match other.split_once('=') {
                    Some((key, value)) => options
                        .keywords
                        .push((key.trim().to_string(), ArgValue::parse_literal(value))),
                    None => options.positional.push(ArgValue::parse_literal(other)),
                },
            }
        }
        Ok(options)
    }

    fn device_id(explicit: Option<UniqueDeviceId>) -> UniqueDeviceId {
        if let Some(id) = explicit {
            return id;
        }
        match MachineDeviceId::load() {
            Ok(source) => source.unique_id(),
            Err(e) => {
                warn!("No machine id ({}), using zero id", e);
                UniqueDeviceId::new([0; 8])
            }
        }
    }

    pub fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
        let options = parse_options(args)?;

        if options.list_boards {
            println!("{}", serde_json::to_string_pretty(BOARDS)?);
            return Ok(());
        }

        let id = device_id(options.id);
        info!("Board: {}, device id {}", options.board.name, id);

        let mut netif = InterfaceController::new(
            options.board,
            SimRadio::new(),
            FixedDeviceId(id),
            SimRegistry,
        )?;
        let keywords: Vec<(&str, ArgValue)> = options
            .keywords
            .iter()
            .map(|(key, value)| (key.as_str(), value.clone()))
            .collect();
        let handle = netif.make_new(&options.positional, &keywords)?;

        let report = Report {
            board: options.board.name,
            capabilities: netif.capabilities(),
            handle,
            credentials: netif.default_credentials(),
            active_pins: netif.active_pins(),
            active_clock: netif.active_clock(),
            bus_hz: netif.bus_hz(),
            calls: netif.into_driver().into_calls(),
        };

        if options.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            for (i, call) in report.calls.iter().enumerate() {
                println!("{:>3}  {}", i, call);
            }
            println!("pins:   {}", report.active_pins);
            match report.bus_hz {
                Some(hz) => println!("clock:  {} ({} Hz)", report.active_clock, hz),
                None => println!("clock:  {} (out of range)", report.active_clock),
            }
            println!("ap:     {}", report.credentials);
            println!("handle: {}", report.handle);
        }
        Ok(())
    }
}
