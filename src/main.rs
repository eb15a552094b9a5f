//! chiptone CLI — play built-in sound effects or export them to WAV.
//!
//! Usage:
//!   ct-cli                  list the sound-effect library
//!   ct-cli <id>             play one effect through the speakers
//!   ct-cli <id> --wav out.wav   render one effect to a WAV file

use ct_master::{render_to_wav, Player, SAMPLE_RATE, UNITS_PER_SPEED_STEP};
use ct_sfx::{library, Sfx, SFX_LENGTH};
use std::time::Duration;
use std::{env, fs};

/// Cap for effects that loop forever.
const MAX_PLAY_SECONDS: u64 = 5;

/// Time allowed for the audio thread to open a device before we check
/// whether it is still alive.
const STARTUP_GRACE: Duration = Duration::from_millis(200);

fn main() {
    let args: Vec<String> = env::args().collect();
    let Some(id_arg) = args.get(1) else {
        list_library();
        return;
    };

    let sfx_id: usize = id_arg.parse().unwrap_or_else(|_| {
        eprintln!("Usage: ct-cli [<sfx id 0-7>] [--wav output.wav]");
        std::process::exit(1);
    });
    let Some(sfx) = library::get(sfx_id) else {
        eprintln!("No such sound effect: {}", sfx_id);
        std::process::exit(1);
    };

    let wav_path = args
        .iter()
        .position(|a| a == "--wav")
        .and_then(|i| args.get(i + 1))
        .cloned();

    match wav_path {
        Some(path) => export_wav(sfx_id, sfx, &path),
        None => play(sfx_id, sfx),
    }
}

fn list_library() {
    println!("id  name         speed  loop");
    for (id, sfx) in library::LIBRARY.iter().enumerate() {
        let looping = if sfx.has_loop() {
            format!("{}..{}", sfx.loop_start, sfx.loop_end)
        } else {
            "-".to_string()
        };
        println!("{:<3} {:<12} {:<6} {}", id, sfx.name, sfx.speed, looping);
    }
}

/// Wall-clock length of one pass over the sequence.
fn sfx_duration(sfx: &Sfx) -> Duration {
    let units = sfx.speed.max(1) as u64 * UNITS_PER_SPEED_STEP as u64 * SFX_LENGTH as u64;
    Duration::from_millis(units * 1000 / SAMPLE_RATE as u64)
}

fn play(sfx_id: usize, sfx: &Sfx) {
    let mut player = Player::new();
    player.play(sfx_id as u8, 0);

    // Bail before sitting through the whole effect if the device failed
    std::thread::sleep(STARTUP_GRACE);
    if !player.is_running() {
        eprintln!("No audio device available");
        std::process::exit(1);
    }
    println!("Playing {} ({})...", sfx_id, sfx.name);

    let duration = if sfx.has_loop() {
        Duration::from_secs(MAX_PLAY_SECONDS)
    } else {
        sfx_duration(sfx) + STARTUP_GRACE
    };
    std::thread::sleep(duration.saturating_sub(STARTUP_GRACE));
}

fn export_wav(sfx_id: usize, sfx: &Sfx, path: &str) {
    // Looping effects are cut off at the cap; one-shots render to the end
    let seconds = if sfx.has_loop() {
        MAX_PLAY_SECONDS
    } else {
        sfx_duration(sfx).as_secs() + 1
    };
    let wav = render_to_wav(sfx_id, SAMPLE_RATE, seconds as u32);
    fs::write(path, &wav).unwrap_or_else(|e| {
        eprintln!("Failed to write {}: {}", path, e);
        std::process::exit(1);
    });
    println!(
        "Wrote {} ({}) to {}: {} bytes",
        sfx_id,
        sfx.name,
        path,
        wav.len()
    );
}
