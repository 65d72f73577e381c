//! harmony_wheel demo
//!
//! Prints the harmony palettes and handle layout for a base color on a
//! 400x400 wheel. Pass a hex color as the first argument (default red).

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use harmony_wheel::prelude::*;

    env_logger::init();

    let arg = std::env::args().nth(1).unwrap_or_else(|| "#FF0000".into());
    let rgba = match Rgba::from_hex(&arg) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{arg}: {e}");
            std::process::exit(1);
        }
    };

    let base = HsvColor::from_rgba(rgba);
    log::info!(
        "base {} -> hsv({:.1}, {:.2}, {:.2})",
        rgba.to_hex(),
        base.hue,
        base.saturation,
        base.value
    );

    let size = Size::square(400.0);
    for mode in HarmonyMode::ALL {
        println!("{mode}");
        for handle in magnifiers(base, mode, size, false) {
            println!(
                "  {}  at ({:6.1}, {:6.1})  diameter {:4.1}",
                handle.color.to_rgba().to_hex(),
                handle.position.x,
                handle.position.y,
                handle.diameter
            );
        }
    }
}

// The demo is native-only; the library itself is platform-neutral.
#[cfg(target_arch = "wasm32")]
fn main() {}
