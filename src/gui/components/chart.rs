// src/gui/components/chart.rs
//
// Minimal painter-drawn charts for page views.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};
use crate::gui::pages::Chart;

const BAR_H: f32 = 16.0;
const LABEL_W: f32 = 180.0;
const LINE_H: f32 = 160.0;
const PALETTE: [Color32; 4] = [
    Color32::from_rgb(0x64, 0xB4, 0xFF),
    Color32::from_rgb(0xF0, 0xD2, 0x3C),
    Color32::from_rgb(0xDC, 0x61, 0x49),
    Color32::from_rgb(0x7C, 0xC8, 0x7C),
];

pub fn draw(ui: &mut egui::Ui, chart: &Chart) {
    match chart {
        Chart::Bars { title, bars } => {
            ui.strong(title);
            bars_chart(ui, bars);
        }
        Chart::Lines { title, series } => {
            ui.strong(title);
            lines_chart(ui, series);
        }
    }
}

fn bars_chart(ui: &mut egui::Ui, bars: &[(String, f64)]) {
    if bars.is_empty() {
        ui.weak("No matches");
        return;
    }
    let max = bars.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let width = (ui.available_width() - LABEL_W - 60.0).max(40.0);
    let text = ui.visuals().text_color();

    for (label, v) in bars {
        let (rect, _) = ui.allocate_exact_size(Vec2::new(LABEL_W + width + 60.0, BAR_H), Sense::hover());
        let painter = ui.painter_at(rect);
        painter.text(
            Pos2::new(rect.left(), rect.center().y),
            Align2::LEFT_CENTER,
            label,
            FontId::proportional(12.0),
            text,
        );
        let frac = if max > 0.0 { (*v / max) as f32 } else { 0.0 };
        let bar = Rect::from_min_size(
            Pos2::new(rect.left() + LABEL_W, rect.top() + 2.0),
            Vec2::new(width * frac, BAR_H - 4.0),
        );
        painter.rect_filled(bar, 2.0, PALETTE[0]);
        painter.text(
            Pos2::new(bar.right() + 6.0, rect.center().y),
            Align2::LEFT_CENTER,
            crate::table::fmt1(*v),
            FontId::proportional(12.0),
            text,
        );
    }
}

fn lines_chart(ui: &mut egui::Ui, series: &[(String, Vec<f64>)]) {
    let n = series.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
    if n < 2 {
        ui.weak("Not enough games to plot");
        return;
    }
    let (lo, hi) = series
        .iter()
        .flat_map(|(_, v)| v.iter().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let span = if hi > lo { hi - lo } else { 1.0 };

    let (resp, painter) = ui.allocate_painter(Vec2::new(ui.available_width(), LINE_H), Sense::hover());
    let r = resp.rect.shrink(6.0);
    painter.rect_stroke(resp.rect, 2.0, ui.visuals().widgets.noninteractive.bg_stroke, egui::StrokeKind::Inside);

    for (i, (_, values)) in series.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let points: Vec<Pos2> = values
            .iter()
            .enumerate()
            .map(|(x, y)| {
                let fx = x as f32 / (n - 1) as f32;
                let fy = ((y - lo) / span) as f32;
                Pos2::new(r.left() + fx * r.width(), r.bottom() - fy * r.height())
            })
            .collect();
        painter.add(Shape::line(points, Stroke::new(1.5, color)));
    }

    ui.horizontal(|ui| {
        for (i, (name, _)) in series.iter().enumerate() {
            ui.colored_label(PALETTE[i % PALETTE.len()], format!("■ {name}"));
        }
        ui.weak(format!("range {} – {}", crate::table::fmt1(lo), crate::table::fmt1(hi)));
    });
}
