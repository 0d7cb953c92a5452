// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use fda_monitor::{cli, gui};
use eframe::egui::{ IconData, ViewportBuilder };

// Green disc with a white bar; drawn in code so there's no asset to ship.
fn app_icon() -> IconData {
    const N: u32 = 32;
    let mut rgba = Vec::with_capacity((N * N * 4) as usize);
    let c = (N as f32 - 1.0) / 2.0;
    for y in 0..N {
        for x in 0..N {
            let (dx, dy) = (x as f32 - c, y as f32 - c);
            let inside = dx * dx + dy * dy <= c * c;
            let bar = dy.abs() <= 2.0 && dx.abs() <= c - 6.0;
            let px = match (inside, bar) {
                (true, true) => [255, 255, 255, 255],
                (true, false) => [40, 167, 69, 255],
                _ => [0, 0, 0, 0],
            };
            rgba.extend_from_slice(&px);
        }
    }
    IconData { rgba, width: N, height: N }
}

fn main() {
    // Same flags as the CLI for source/config; everything else is in the UI.
    let app_options = match cli::parse_args(std::env::args().skip(1)).and_then(|a| cli::resolve_options(&a)) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, app_options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
