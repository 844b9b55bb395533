use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::entities::{PlanInput, Placement, PlacementStatus};
use crate::geometry::primitives::Rect;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;

/// Draws a preview of the placements on the canvas.
/// Every sprite is drawn as a rectangle of its scaled natural size, rotated about its center.
pub fn layout_to_svg(
    input: &PlanInput,
    placements: &[Placement],
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let canvas = input.canvas.rect();
    let vbox = canvas.scale(1.10);
    let theme = &options.theme;

    let stroke_width =
        f64::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information on above the left top of the canvas
        let n_relaxed = placements.iter().filter(|p| p.is_relaxed()).count();
        let label_content = format!(
            "canvas: {} | sprites: {} | relaxed: {} | {}",
            input.canvas,
            placements.len(),
            n_relaxed,
            title,
        );
        let font_size = f64::min(canvas.width(), canvas.height()) * 0.025;
        Text::new(label_content)
            .set("x", canvas.x_min)
            .set("y", canvas.y_min - 0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let canvas_group = Group::new()
        .set("id", "canvas")
        .add(
            svg_util::rect_to_svg(
                &canvas,
                &[
                    ("fill", &*format!("{}", theme.canvas_fill)),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            )
            .add(Title::new(format!("canvas: {}", input.canvas))),
        );

    let sprites_group = placements.iter().fold(
        Group::new().set("id", "sprites"),
        |group, placement| {
            let size = &input.sprites[placement.sprite_id];
            let (w, h) = (
                size.width as f64 * placement.scale,
                size.height as f64 * placement.scale,
            );
            //drawn around the origin, then moved into place
            let sprite_rect = Rect {
                x_min: -w / 2.0,
                y_min: -h / 2.0,
                x_max: w / 2.0,
                y_max: h / 2.0,
            };
            let fill = match placement.status {
                PlacementStatus::Accepted => theme.sprite_fill,
                PlacementStatus::Relaxed(_) => theme.relaxed_sprite_fill,
            };
            let (cx, cy) = placement.center.into();

            let mut sprite_group = Group::new()
                .set("id", format!("sprite_{}", placement.sprite_id))
                .add(Title::new(format!(
                    "sprite {} ({}): {}",
                    placement.sprite_id, size, placement
                )))
                .add(
                    svg_util::rect_to_svg(
                        &sprite_rect,
                        &[
                            ("fill", &*format!("{fill}")),
                            ("fill-opacity", "0.8"),
                            ("stroke", "black"),
                            ("stroke-width", &*format!("{stroke_width}")),
                        ],
                    )
                    .set(
                        "transform",
                        format!("translate({cx} {cy}), rotate({})", placement.rotation),
                    ),
                );

            if options.bboxes {
                let bbox = placement.footprint(size).rect_at(placement.center);
                sprite_group = sprite_group.add(svg_util::rect_to_svg(
                    &bbox,
                    &[
                        ("fill", "none"),
                        ("stroke", &*format!("{}", theme.bbox_stroke)),
                        ("stroke-width", &*format!("{}", 0.5 * stroke_width)),
                        ("stroke-opacity", "0.6"),
                        (
                            "stroke-dasharray",
                            &*format!("{} {}", 2.0 * stroke_width, 4.0 * stroke_width),
                        ),
                    ],
                ));
            }

            if options.sprite_ids {
                let font_size = f64::min(w, h) * 0.2;
                sprite_group = sprite_group.add(
                    Text::new(format!("{}", placement.sprite_id))
                        .set("x", cx)
                        .set("y", cy)
                        .set("font-size", font_size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                );
            }

            group.add(sprite_group)
        },
    );

    let vbox_svg = (vbox.x_min, vbox.y_min, vbox.width(), vbox.height());

    Document::new()
        .set("viewBox", vbox_svg)
        .add(canvas_group)
        .add(sprites_group)
        .add(label)
}
