//! Canvas rendering for the particle field.
//!
//! The simulator only reports what to draw; this module turns those callbacks
//! into `CanvasRenderingContext2d` calls. The canvas is cleared each frame so
//! the page background shows through.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::FieldState;
use super::theme::Theme;

/// Renders one frame of the field to the canvas.
pub fn render(state: &FieldState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);

	ctx.set_fill_style_str(&theme.particle_color.to_css());
	ctx.set_stroke_style_str(&theme.line_color.to_css());
	ctx.set_line_width(theme.line_width);

	state.particles.render(
		state.config.max_connect_distance,
		|x, y, size| draw_particle(ctx, x, y, size),
		|x1, y1, x2, y2| draw_edge(ctx, x1, y1, x2, y2),
	);
}

fn draw_particle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, size: f64) {
	ctx.begin_path();
	let _ = ctx.arc(x, y, size, 0.0, PI * 2.0);
	ctx.fill();
}

fn draw_edge(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
	ctx.begin_path();
	ctx.move_to(x1, y1);
	ctx.line_to(x2, y2);
	ctx.stroke();
}
