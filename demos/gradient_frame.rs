//! Render one frame of the background gradient on the CPU and write it as a
//! binary PPM (viewable with most image tools, no decoder dependencies).

use std::fs;
use std::path::Path;

use recap_motion::RenderSize;
use recap_motion::shaders::gradient;

fn main() -> anyhow::Result<()> {
    let size = RenderSize::new(640, 360);
    let time = 3.7;

    let mut frame = vec![0u8; size.width as usize * size.height as usize * 4];
    gradient::fill(&mut frame, size, time)?;

    let out_dir = Path::new("target/demo_frames");
    fs::create_dir_all(out_dir)?;
    let out_path = out_dir.join("gradient.ppm");

    // The gradient is fully opaque, so premultiplied RGB is already straight.
    let mut ppm = format!("P6\n{} {}\n255\n", size.width, size.height).into_bytes();
    for px in frame.chunks_exact(4) {
        ppm.extend_from_slice(&px[0..3]);
    }
    fs::write(&out_path, ppm)?;

    println!("wrote {} at t={time}s", out_path.display());
    Ok(())
}
