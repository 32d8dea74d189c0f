use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use dictionary::LookupResult;
use thiserror::Error;

use crate::utilities::confirm;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no pronunciation audio is available for this word")]
    NoAudio,
    #[error("failed to download the pronunciation audio")]
    Fetch(#[from] reqwest::Error),
    #[error("failed to store the pronunciation audio")]
    Io(#[from] io::Error),
    #[error("no audio output device is available")]
    Stream(#[from] rodio::StreamError),
    #[error("failed to start audio playback")]
    Play(#[from] rodio::PlayError),
    #[error("failed to decode the pronunciation audio")]
    Decode(#[from] rodio::decoder::DecoderError),
}

/// Downloads the first pronunciation clip the result carries into a temp
/// file, plays it, and replays it until the user declines. The clip is
/// discarded when the temp file drops.
pub async fn pronounce(result: &LookupResult) -> Result<(), AudioError> {
    let url = clip_url(result).ok_or(AudioError::NoAudio)?;
    tracing::debug!(url, "downloading pronunciation clip");
    let bytes = reqwest::get(url).await?.error_for_status()?.bytes().await?;

    let mut clip = tempfile::NamedTempFile::new()?;
    clip.write_all(&bytes)?;
    clip.flush()?;

    loop {
        play(clip.path())?;
        if !confirm("Hear it again? (Y/n): ")? {
            break;
        }
    }
    Ok(())
}

fn clip_url(result: &LookupResult) -> Option<&str> {
    result
        .iter()
        .flat_map(|entry| &entry.phonetics)
        .filter_map(|phonetic| phonetic.audio.as_deref())
        .find(|url| !url.is_empty())
}

fn play(path: &Path) -> Result<(), AudioError> {
    let (_stream, handle) = rodio::OutputStream::try_default()?;
    let sink = rodio::Sink::try_new(&handle)?;
    let source = rodio::Decoder::new(BufReader::new(File::open(path)?))?;
    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}
