//! Host-side preview of the status widget.
//!
//! Renders a few battery states through the full widget lifecycle (draw
//! upright, rotate, dirty event) and dumps each rotated frame as ASCII.
//!
//! Run with `RUST_LOG=info cargo run --example main`.

use crossbeam_channel::unbounded;
use keyview_canvas::{PackedCanvas, SIDE};
use keyview_ui::{StatusState, StatusWidget, UiEvent};

fn main() {
    env_logger::init();
    log::info!("keyview status widget preview");

    let (tx, rx) = unbounded();
    let mut widget = StatusWidget::new(tx);

    let states = [
        StatusState {
            battery: 100,
            charging: false,
        },
        StatusState {
            battery: 53,
            charging: true,
        },
        StatusState {
            battery: 5,
            charging: false,
        },
    ];

    for state in states {
        widget.refresh(&state);

        // The render loop only pushes frames the widget marked dirty
        if rx.try_recv() == Ok(UiEvent::DirtyCanvas) {
            log::info!(
                "frame: battery {}%, charging {}",
                state.battery,
                state.charging
            );
            print_frame(widget.canvas());
        }
    }
}

fn print_frame(canvas: &PackedCanvas) {
    for y in 0..SIDE {
        let row: String = (0..SIDE)
            .map(|x| {
                if canvas.pixel(x, y) == Some(true) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        println!("{row}");
    }
    println!();
}
