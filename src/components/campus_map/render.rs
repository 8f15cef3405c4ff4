use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::plan::{DrawPlan, Primitive};
use super::theme::MapTheme;

/// Paint a draw plan onto the 2D context. Stateless; the plan carries the
/// geometry and semantic flags, the theme maps flags to colors.
pub fn paint(
	plan: &DrawPlan,
	theme: &MapTheme,
	width: f64,
	height: f64,
	ctx: &CanvasRenderingContext2d,
) {
	ctx.set_fill_style_str(theme.background);
	ctx.fill_rect(0.0, 0.0, width, height);

	for primitive in &plan.primitives {
		match primitive {
			Primitive::GridLine { x1, y1, x2, y2 } => {
				ctx.set_stroke_style_str(theme.grid_line);
				ctx.set_line_width(1.0);
				ctx.begin_path();
				ctx.move_to(*x1, *y1);
				ctx.line_to(*x2, *y2);
				ctx.stroke();
			}
			Primitive::Path {
				x1,
				y1,
				x2,
				y2,
				highlighted,
			} => {
				let (color, line_width) = if *highlighted {
					(theme.path_highlight, theme.path_width_highlight)
				} else {
					(theme.path, theme.path_width)
				};
				ctx.set_stroke_style_str(color);
				ctx.set_line_width(line_width);
				ctx.set_line_cap("round");
				ctx.begin_path();
				ctx.move_to(*x1, *y1);
				ctx.line_to(*x2, *y2);
				ctx.stroke();
			}
			Primitive::Marker {
				x,
				y,
				active,
				glyph,
				label,
				..
			} => {
				let radius = if *active {
					theme.marker_radius_active
				} else {
					theme.marker_radius
				};
				draw_disc(ctx, *x, *y, radius, marker_fill(theme, *active));
				if !*active {
					ctx.begin_path();
					let _ = ctx.arc(*x, *y, radius, 0.0, 2.0 * PI);
					ctx.set_stroke_style_str(theme.marker_outline);
					ctx.set_line_width(1.0);
					ctx.stroke();
				}
				draw_glyph(ctx, *x, *y, radius, glyph);
				draw_label(ctx, theme, *x, *y + radius + 12.0, label);
			}
			Primitive::Position {
				x,
				y,
				alpha,
				glyph,
				label,
			} => {
				ctx.set_global_alpha(*alpha);
				draw_disc(ctx, *x, *y, theme.position_radius, theme.position_fill);
				ctx.begin_path();
				let _ = ctx.arc(*x, *y, theme.position_radius, 0.0, 2.0 * PI);
				ctx.set_stroke_style_str(theme.marker_outline);
				ctx.set_line_width(1.0);
				ctx.stroke();
				draw_glyph(ctx, *x, *y, theme.position_radius, glyph);
				draw_label(ctx, theme, *x, *y + theme.position_radius + 12.0, label);
				ctx.set_global_alpha(1.0);
			}
		}
	}
}

fn marker_fill(theme: &MapTheme, active: bool) -> &'static str {
	if active {
		theme.marker_fill_active
	} else {
		theme.marker_fill
	}
}

fn draw_disc(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, fill: &str) {
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(fill);
	ctx.fill();
}

fn draw_glyph(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, glyph: &str) {
	ctx.set_font(&format!("{}px sans-serif", radius));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(glyph, x, y);
}

fn draw_label(ctx: &CanvasRenderingContext2d, theme: &MapTheme, x: f64, y: f64, label: &str) {
	ctx.set_fill_style_str(theme.label_text);
	ctx.set_font("11px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("top");
	let _ = ctx.fill_text(label, x, y);
}
