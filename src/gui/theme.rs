use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::campus()
    }
}

impl Theme {
    pub fn campus() -> Self {
        Theme { dark: Palette::campus_night(), light: Palette::campus_day() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).accent).strong()
    }

    pub fn danger(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).danger
    }

    pub fn success(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).success
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).muted
    }
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    panel: Color32,
    raised: Color32,
    foreground: Color32,
    muted: Color32,
    accent: Color32,
    danger: Color32,
    warning: Color32,
    success: Color32,
}

impl Palette {
    fn campus_night() -> Self {
        Self {
            background: Color32::from_rgb(24, 28, 38),
            panel: Color32::from_rgb(30, 35, 48),
            raised: Color32::from_rgb(44, 50, 66),
            foreground: Color32::from_rgb(226, 230, 238),
            muted: Color32::from_rgb(120, 132, 158),
            accent: Color32::from_rgb(96, 165, 250),
            danger: Color32::from_rgb(248, 113, 113),
            warning: Color32::from_rgb(251, 191, 36),
            success: Color32::from_rgb(74, 222, 128),
        }
    }

    fn campus_day() -> Self {
        Self {
            background: Color32::from_rgb(250, 250, 252),
            panel: Color32::from_rgb(241, 243, 247),
            raised: Color32::from_rgb(255, 255, 255),
            foreground: Color32::from_rgb(31, 41, 55),
            muted: Color32::from_rgb(107, 114, 128),
            accent: Color32::from_rgb(37, 99, 235),
            danger: Color32::from_rgb(220, 38, 38),
            warning: Color32::from_rgb(217, 119, 6),
            success: Color32::from_rgb(22, 163, 74),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let mut visuals = Visuals {
        dark_mode: is_dark,
        hyperlink_color: palette.accent,
        extreme_bg_color: palette.raised,
        error_fg_color: palette.danger,
        warn_fg_color: palette.warning,
        window_fill: palette.background,
        panel_fill: palette.panel,
        ..default
    };

    visuals.selection.bg_fill = palette.accent.linear_multiply(0.4);
    visuals.widgets.noninteractive.fg_stroke =
        Stroke { color: palette.foreground, ..visuals.widgets.noninteractive.fg_stroke };
    visuals.widgets.inactive.bg_fill = palette.raised;
    visuals.widgets.hovered.bg_stroke =
        Stroke { color: palette.accent, ..visuals.widgets.hovered.bg_stroke };
    visuals.widgets.active.bg_stroke =
        Stroke { color: palette.accent, ..visuals.widgets.active.bg_stroke };

    ctx.set_visuals_of(variant, visuals);
}
