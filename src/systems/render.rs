//! Rendering.
//!
//! [`render_system`] draws the whole screen from the current
//! [`CounterState`] every frame:
//!
//! 1. Title
//! 2. Counter panel, tinted by the background flash and clipped to its bounds,
//!    with the counter text, the "+1" labels and the particles on top
//! 3. Increment button
//! 4. History list, clipped and scrolled, newest entry highlighted
//! 5. Debug overlay when [`DebugMode`] is present

use std::ffi::CString;

use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::prelude::*;

use crate::entities::floatinglabel::FloatingLabel;
use crate::entities::listentry::ListEntry;
use crate::entities::particle::Particle;
use crate::palette;
use crate::resources::counterstate::CounterState;
use crate::resources::debugmode::DebugMode;
use crate::resources::listscroll::ListScroll;
use crate::resources::screenlayout::{
    BUTTON_FONT_SIZE, COUNTER_FONT_SIZE, LIST_ROW_HEIGHT, ScreenLayout, TITLE_FONT_SIZE,
};
use crate::resources::tickscheduler::{TickPhase, TickScheduler, TickSchedulers};

pub const TITLE_TEXT: &str = "Tap Counter";
const BUTTON_TEXT: &str = "Increment";
const LABEL_TEXT: &str = "+1";
const ROW_PADDING: f32 = 15.0;
const ROW_GAP: f32 = 8.0;
const LATEST_FONT_SIZE: i32 = 18;
const ENTRY_FONT_SIZE: i32 = 16;

/// Draw the screen.
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    layout: Res<ScreenLayout>,
    state: Option<Res<CounterState>>,
    scroll: Res<ListScroll>,
    schedulers: Res<TickSchedulers>,
    debug_mode: Option<Res<DebugMode>>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(palette::BACKGROUND);

    draw_centered_text(
        &mut d,
        TITLE_TEXT,
        layout.screen.w as f32 / 2.0,
        layout.title_y,
        TITLE_FONT_SIZE,
        palette::TITLE,
    );

    let Some(state) = state else {
        return;
    };

    draw_panel(&mut d, &layout, &state);
    draw_button(&mut d, &layout);
    draw_history(&mut d, &layout, state.entries().iter(), scroll.offset);

    if debug_mode.is_some() {
        render_debug_ui(&mut d, &state, &schedulers);
    }
}

fn draw_panel(d: &mut RaylibDrawHandle, layout: &ScreenLayout, state: &CounterState) {
    let panel = layout.panel;
    d.draw_rectangle_rec(panel, palette::map_color(palette::PANEL_BASE, state.flash()));

    // Effects overflowing the panel are clipped.
    let mut s = d.begin_scissor_mode(
        panel.x as i32,
        panel.y as i32,
        panel.width as i32,
        panel.height as i32,
    );
    let area = layout.effect_area;

    draw_centered_text(
        &mut s,
        &format!("Count: {}", state.count()),
        area.x + area.width / 2.0,
        area.y + (area.height - COUNTER_FONT_SIZE as f32) / 2.0,
        COUNTER_FONT_SIZE,
        palette::TEXT,
    );
    for label in state.labels() {
        draw_label(&mut s, area, label);
    }
    for particle in state.particles() {
        draw_particle(&mut s, area, particle);
    }
}

fn draw_label<D: RaylibDraw>(d: &mut D, area: Rectangle, label: &FloatingLabel) {
    let size = label.font_size.round() as i32;
    if size <= 0 {
        return;
    }
    let color = palette::with_opacity(palette::ACCENT_BLUE, label.opacity);
    let centre_x = area.x + area.width / 2.0;
    let y = area.y + label.top;
    // Default font has no bold face; a one pixel double strike stands in.
    draw_centered_text(d, LABEL_TEXT, centre_x, y, size, color);
    draw_centered_text(d, LABEL_TEXT, centre_x + 1.0, y, size, color);
}

fn draw_particle<D: RaylibDraw>(d: &mut D, area: Rectangle, particle: &Particle) {
    if particle.size <= 0.0 {
        return;
    }
    let radius = particle.size / 2.0;
    let left = area.x + particle.x / 100.0 * area.width;
    let top = area.y + particle.y / 100.0 * area.height;
    let color = palette::with_opacity(palette::particle_color(particle.color), particle.opacity);
    d.draw_circle_v(
        Vector2 {
            x: left + radius,
            y: top + radius,
        },
        radius,
        color,
    );
}

fn draw_button(d: &mut RaylibDrawHandle, layout: &ScreenLayout) {
    let button = layout.button;
    d.draw_rectangle_rec(button, palette::ACCENT_BLUE);
    draw_centered_text(
        d,
        BUTTON_TEXT,
        button.x + button.width / 2.0,
        button.y + (button.height - BUTTON_FONT_SIZE as f32) / 2.0,
        BUTTON_FONT_SIZE,
        palette::TEXT,
    );
}

fn draw_history<'a>(
    d: &mut RaylibDrawHandle,
    layout: &ScreenLayout,
    entries: impl Iterator<Item = &'a ListEntry>,
    offset: f32,
) {
    let list = layout.list;
    if list.height <= 0.0 || list.width <= 0.0 {
        return;
    }
    let mut s = d.begin_scissor_mode(
        list.x as i32,
        list.y as i32,
        list.width as i32,
        list.height as i32,
    );

    for (index, entry) in entries.enumerate() {
        let row_top = list.y - offset + index as f32 * LIST_ROW_HEIGHT;
        if row_top + LIST_ROW_HEIGHT < list.y {
            continue;
        }
        if row_top > list.y + list.height {
            break;
        }
        let latest = index == 0;
        let row = Rectangle {
            x: list.x,
            y: row_top + ROW_GAP / 2.0,
            width: list.width,
            height: LIST_ROW_HEIGHT - ROW_GAP,
        };
        let (border, text_color, font_size) = if latest {
            (palette::ACCENT_RED, palette::ACCENT_RED, LATEST_FONT_SIZE)
        } else {
            (palette::ACCENT_BLUE, palette::TEXT, ENTRY_FONT_SIZE)
        };
        s.draw_rectangle_rec(row, palette::PANEL_BASE);
        s.draw_rectangle_lines_ex(row, 1.0, border);

        let text_x = (row.x + ROW_PADDING) as i32;
        let text_y = (row.y + (row.height - font_size as f32) / 2.0) as i32;
        s.draw_text(&entry.text, text_x, text_y, font_size, text_color);
        if latest {
            s.draw_text(&entry.text, text_x + 1, text_y, font_size, text_color);
        }
    }
}

/// Draw FPS, store sizes and scheduler phases in the top-left corner.
pub fn render_debug_ui(
    d: &mut RaylibDrawHandle,
    state: &CounterState,
    schedulers: &TickSchedulers,
) {
    let fps = d.get_fps();
    let lines = [
        format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps),
        format!(
            "count: {} | labels: {} | particles: {} | entries: {}/{}",
            state.count(),
            state.labels().len(),
            state.particles().len(),
            state.entries().len(),
            state.list_capacity()
        ),
        format!("flash: {:.2}", state.flash()),
        describe_scheduler(&schedulers.labels),
        describe_scheduler(&schedulers.particles),
        describe_scheduler(&schedulers.flash),
    ];
    for (i, line) in lines.iter().enumerate() {
        d.draw_text(line, 10, 10 + i as i32 * 14, 10, Color::YELLOW);
    }
}

/// One-line summary of a scheduler, e.g. `particles: active (12 ms), 31 ticks`.
pub fn describe_scheduler(scheduler: &TickScheduler) -> String {
    let phase = match scheduler.phase() {
        TickPhase::Idle => "idle".to_string(),
        TickPhase::Active { remaining, .. } => {
            format!("active ({:.0} ms)", (remaining * 1000.0).max(0.0))
        }
    };
    format!(
        "{}: {}, {} ticks",
        scheduler.name(),
        phase,
        scheduler.ticks_fired()
    )
}

fn draw_centered_text<D: RaylibDraw>(
    d: &mut D,
    text: &str,
    centre_x: f32,
    top: f32,
    font_size: i32,
    color: Color,
) {
    let width = text_width(text, font_size);
    d.draw_text(
        text,
        centre_x as i32 - width / 2,
        top as i32,
        font_size,
        color,
    );
}

/// Pixel width of `text` in the default font.
fn text_width(text: &str, font_size: i32) -> i32 {
    let Ok(c_text) = CString::new(text) else {
        return 0;
    };
    unsafe { ffi::MeasureText(c_text.as_ptr(), font_size) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_idle_scheduler() {
        let s = TickScheduler::new("labels", 0.05);
        assert_eq!(describe_scheduler(&s), "labels: idle, 0 ticks");
    }

    #[test]
    fn test_describe_active_scheduler() {
        let mut s = TickScheduler::new("particles", 0.03);
        s.observe(true, 0);
        assert_eq!(describe_scheduler(&s), "particles: active (30 ms), 0 ticks");
    }
}
