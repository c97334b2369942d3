//! Build the scene animations a recap video uses and dump them as JSON, the
//! same payload the timeline engine receives at scene-construction time.

use recap_motion::{count_up, downscale_intro, scrolling_texts, tap_gesture};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let highlights: Vec<String> = ["134 pull requests", "29 reviews", "6 releases"]
        .iter()
        .map(|s| (*s).to_owned())
        .collect();

    let descriptors = [
        count_up(137, 480.0, 6.0),
        scrolling_texts(&highlights, 540.0),
        downscale_intro(),
        tap_gesture(),
    ];

    for desc in &descriptors {
        desc.validate()?;
        println!("{}", serde_json::to_string_pretty(desc)?);
    }
    Ok(())
}
