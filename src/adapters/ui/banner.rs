//! Startup banner (MEDICHAT) with a clinic-teal gradient.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Clinic Teal (#0f6d66), the app's primary color.
const CLINIC_TEAL: (u8, u8, u8) = (0x0f, 0x6d, 0x66);
/// Soft Mint (#7fd8cf).
const SOFT_MINT: (u8, u8, u8) = (0x7f, 0xd8, 0xcf);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints the welcome banner: "MEDICHAT" in figlet ASCII with a gradient
/// from Clinic Teal to Soft Mint, then version and tagline.
pub fn print_welcome() {
    let mut out = stdout();
    let font = FIGfont::standard().expect("figlet standard font");
    let figure = font.convert("MEDICHAT").expect("figlet convert MEDICHAT");
    let art = figure.to_string();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(CLINIC_TEAL, SOFT_MINT, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: SOFT_MINT.0,
        g: SOFT_MINT.1,
        b: SOFT_MINT.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(Print("Medical Assistant\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
