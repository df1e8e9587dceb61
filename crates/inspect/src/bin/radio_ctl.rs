//! encode and decode radio control payloads from the command line

use std::fmt::Display;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use log::info;
use radio_control::{
    Bitrate, ControlCodec, ControlInfo, Power, Probability, RadioCommand, RadioConfigureCommand,
    RadioLimits, RadioReceptionIndication, RadioTransmissionRequest, Snir,
};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let codec = ControlCodec::default();

    match args.first().map(String::as_str) {
        Some("samples") | None => samples(&codec),
        Some("decode") => {
            let input = args.get(1).context("usage: radio_ctl decode <hex>")?;
            decode(&codec, input)
        }
        Some(other) => bail!("unknown command '{}', expected 'samples' or 'decode'", other),
    }
}

fn samples(codec: &ControlCodec) -> Result<()> {
    println!("{}", "Radio Control Payloads".bright_blue().bold());
    println!("{}", "======================".bright_blue());

    let samples: Vec<(&str, ControlInfo)> = vec![
        (
            "Configure channel 5 at 0.1 W",
            RadioCommand::from(
                RadioConfigureCommand::new()
                    .with_channel_number(5)
                    .with_power(Power::new(0.1)?),
            )
            .into(),
        ),
        (
            "Transmit next frame at 2400 bps",
            RadioTransmissionRequest::new()
                .with_bitrate(Bitrate::new(2400.0)?)
                .into(),
        ),
        (
            "Clean reception",
            RadioReceptionIndication::new()
                .with_bit_error_count(0)
                .with_packet_error_rate(Probability::new(0.0)?)
                .with_min_rssi(Power::new(2.5e-10)?)
                .with_min_snir(Snir::new(18.0)?)
                .into(),
        ),
    ];

    let limits = RadioLimits::default();
    for (name, sample) in samples {
        if let ControlInfo::Command(cmd) = &sample {
            cmd.validate(&limits)
                .with_context(|| format!("sample '{}' violates default limits", name))?;
        }
        let bytes = codec.encode(&sample)?;
        info!("Encoded sample '{}' ({} bytes)", name, bytes.len());

        println!("\n{}", format!(">>> {}", name).bright_green().bold());
        print_info(&sample);
        println!("{} {}", "hex:".bright_yellow(), hex::encode(&bytes));
    }

    Ok(())
}

fn decode(codec: &ControlCodec, input: &str) -> Result<()> {
    let bytes = hex::decode(input.trim()).context("input is not valid hex")?;
    let info = codec
        .decode(&bytes)
        .with_context(|| format!("failed to decode {} bytes", bytes.len()))?;

    println!("{}", format!(">>> {:?} control info", info.direction()).bright_green().bold());
    print_info(&info);
    Ok(())
}

fn print_info(info: &ControlInfo) {
    match info {
        ControlInfo::Command(RadioCommand::Configure(cmd)) => {
            println!("Command: {:?} (code {})", cmd.code(), u8::from(cmd.code()));
            field("channel", cmd.channel_number, "unchanged");
            field("bitrate", cmd.bitrate, "unchanged");
            field("power", cmd.power, "unchanged");
        }
        ControlInfo::Command(other) => println!("Command: {:?}", other),
        ControlInfo::TransmissionRequest(req) => {
            println!("Transmission request");
            field("bitrate", req.bitrate, "unchanged");
            field("power", req.power, "unchanged");
        }
        ControlInfo::ReceptionIndication(ind) => {
            println!("Reception indication");
            field("bit errors", ind.bit_error_count, "unknown");
            field("symbol errors", ind.symbol_error_count, "unknown");
            field("packet error rate", ind.packet_error_rate, "unknown");
            field("bit error rate", ind.bit_error_rate, "unknown");
            field("symbol error rate", ind.symbol_error_rate, "unknown");
            field("min RSSI", ind.min_rssi, "unknown");
            field("min SNIR", ind.min_snir, "unknown");
        }
    }
}

fn field<T: Display>(name: &str, value: Option<T>, absent: &str) {
    match value {
        Some(v) => println!("  {:<18} {}", name, v),
        None => println!("  {:<18} {}", name, absent.dimmed()),
    }
}
