//! Compare voices across every provider you have a key for.
//!
//! Reads `OPENAI_API_KEY`, `ELEVENLABS_API_KEY` and `LMNT_API_KEY` from
//! the environment, synthesizes the given text (or a generated haiku)
//! with each provider's voices and writes one MP3 per voice.

use std::env;
use ttsdev::session::{Credentials, RunPlan, Session};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ttsdev::init_logging();

    let mut credentials = Credentials::new();
    if let Ok(key) = env::var("OPENAI_API_KEY") {
        credentials = credentials.with_openai(key);
    }
    if let Ok(key) = env::var("ELEVENLABS_API_KEY") {
        credentials = credentials.with_elevenlabs(key);
    }
    if let Ok(key) = env::var("LMNT_API_KEY") {
        credentials = credentials.with_lmnt(key);
    }

    let session = Session::new(credentials);
    let providers = session.available_providers();
    if providers.is_empty() {
        eprintln!("set at least one of OPENAI_API_KEY, ELEVENLABS_API_KEY, LMNT_API_KEY");
        std::process::exit(1);
    }

    let text = match env::args().nth(1) {
        Some(text) => text,
        None => {
            let text = session.generate_sample_text().await?;
            println!("generated sample text:\n{text}\n");
            text
        }
    };

    let mut plan = RunPlan::new();
    for kind in &providers {
        for voice in session.list_voices(*kind).await? {
            plan.select(*kind, voice, true);
        }
    }

    for run in session.run(&text, &plan).await? {
        for clip in run.clips {
            match clip.audio {
                Ok(audio) => {
                    let file = format!("{}_{}.mp3", run.provider, clip.voice.name);
                    std::fs::write(&file, audio.data())?;
                    println!(
                        "{} voice {}: {} ms -> {file}",
                        run.provider,
                        clip.voice,
                        audio.duration_ms()?
                    );
                }
                Err(err) => eprintln!("{} voice {}: {err}", run.provider, clip.voice),
            }
        }
    }

    Ok(())
}
