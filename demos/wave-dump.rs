//! wave-dump.rs
//! (c) 2026 Jamie Hardt. All rights reserved.
//!
//! This program demonstrates reading a wave file and printing its format
//! along with the first samples of one channel.

extern crate riffwave;
use riffwave::{CommonFormat, WaveContainer};

#[macro_use]
extern crate clap;
use clap::{App, Arg};

struct Settings {
    input_path: String,
    count: usize,
    channel: usize,
}

fn dump_file(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let wave = WaveContainer::open(&settings.input_path)?;
    let header = wave.header();
    let format = wave.format();
    let data = wave.data_chunk();

    println!("{}", settings.input_path);
    println!(
        "  {:?} length {} form {:?}",
        header.chunk_id, header.declared_size, header.format_tag
    );

    let codec = match format.common_format() {
        CommonFormat::IntegerPCM => String::from("integer PCM"),
        other => format!("{:?} (decoded as integer PCM)", other),
    };
    println!("  {:?} length {}: {}", format.chunk_id, format.chunk_size, codec);
    println!(
        "    {} channels, {} Hz, {} bits, {} bytes/frame, {} bytes/sec",
        format.channel_count,
        format.sample_rate,
        format.bits_per_sample,
        format.block_align,
        format.byte_rate
    );
    println!(
        "  {:?} length {} at offset {}, {} frames ({:.3} s)",
        data.chunk_id,
        data.declared_size,
        data.payload_start,
        wave.frame_count(),
        wave.duration_seconds()
    );

    let audio = match wave.audio() {
        Some(audio) => audio,
        None => return Ok(()),
    };

    match audio.channel(settings.channel) {
        Some(samples) => {
            let shown = &samples[..settings.count.min(samples.len())];
            println!("channel {}: {:?}", settings.channel, shown);
        }
        None => eprintln!(
            "Channel {} requested, file has {} channels.",
            settings.channel,
            audio.channel_count()
        ),
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = App::new("wave-dump")
        .version(crate_version!())
        .author(crate_authors!())
        .about("Print the format and leading samples of a PCM wave file.")
        .arg(
            Arg::with_name("count")
                .long("count")
                .short("n")
                .help("Number of samples to print.")
                .default_value("100"),
        )
        .arg(
            Arg::with_name("channel")
                .long("channel")
                .short("c")
                .help("Channel to print, counting from 0.")
                .default_value("0"),
        )
        .arg(
            Arg::with_name("INPUT")
                .help("Input wave file")
                .required(true),
        )
        .get_matches();

    let settings = Settings {
        input_path: matches.value_of("INPUT").unwrap().into(),
        count: value_t!(matches, "count", usize)?,
        channel: value_t!(matches, "channel", usize)?,
    };

    dump_file(settings)
}
