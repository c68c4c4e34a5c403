#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use buy_rent_toolbox::breakeven::{self, BreakevenInput, BreakevenResult, RentVerdict};
use buy_rent_toolbox::config;
use buy_rent_toolbox::currency::currency_options;
use buy_rent_toolbox::export;
use buy_rent_toolbox::i18n;
use eframe::{egui, App, Frame};
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoint, PlotPoints, Text};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default()
        .with_transparent(true)
        .with_inner_size(egui::vec2(1100.0, 720.0));
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Buy vs Rent Decision Toolbox",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 UI를 표시하기 위해 시스템 폰트를 우선 적용한다.
/// 1) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 2) 실패 시 Err를 반환해 설정에서 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }
    Err("CJK font not found. Latin UI still works; set a user font (.ttf/.ttc) in settings for Korean.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

fn legend_toggle(ui: &mut egui::Ui, title: &str, body: &str, state: &mut bool) {
    ui.horizontal(|ui| {
        ui.checkbox(state, title);
    });
    if *state {
        ui.add(egui::Label::new(egui::RichText::new(body).small()).wrap(true));
    }
}

/// 구간 음영용으로 표본을 판정별 (x, y)=(월세, 월세) 점열로 나눈다.
fn verdict_segments(result: &BreakevenResult) -> (Vec<[f64; 2]>, Vec<[f64; 2]>) {
    let mut buying = Vec::new();
    let mut renting = Vec::new();
    for sample in &result.samples {
        let point = [sample.rent, sample.rent];
        match sample.verdict {
            RentVerdict::FavorsBuying => buying.push(point),
            RentVerdict::FavorsRenting => renting.push(point),
            RentVerdict::Breakeven => {
                // 경계점은 양쪽 음영에 모두 붙여 빈틈을 없앤다.
                buying.push(point);
                renting.push(point);
            }
        }
    }
    (buying, renting)
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_pack_dir_input: String,
    lang_save_status: Option<String>,
    window_alpha: f32,
    always_on_top: bool,
    ui_scale: f32,
    theme: ThemeChoice,
    apply_initial_view_size: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    show_method_modal: bool,
    show_model_note: bool,
    custom_font_path: String,
    font_load_error: Option<String>,
    // 분석 입력. 매 프레임 이 값으로 전체 재계산한다.
    inputs: BreakevenInput,
    export_status: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ThemeChoice {
    System,
    Light,
    Dark,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let has_overrides = tr.lookup("gui.nav.app_title").is_some();
        eprintln!("GUI language resolved: {lang_code}, overrides_loaded={has_overrides}");
        let lang_input = config.language.clone();
        let lang_pack_dir_input = config.language_pack_dir.clone().unwrap_or_default();
        let inputs = config.defaults.clone();
        Self {
            config: config.clone(),
            tr,
            lang_input,
            lang_pack_dir_input,
            lang_save_status: None,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            always_on_top: false,
            ui_scale: 1.0,
            theme: ThemeChoice::System,
            apply_initial_view_size: true,
            show_settings_modal: false,
            show_help_modal: false,
            show_method_modal: false,
            show_model_note: false,
            custom_font_path: String::new(),
            font_load_error: None,
            inputs,
            export_status: None,
        }
    }

    /// 좌측 입력 패널.
    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let symbol = self.config.currency.symbol();

        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.inputs.heading", "Input Parameters"));
            ui.add_space(8.0);
        });

        egui::Frame::group(ui.style()).show(ui, |ui| {
            heading_with_tip(
                ui,
                &txt("gui.inputs.costs", "Initial Costs"),
                &txt(
                    "gui.inputs.costs_tip",
                    "One-time costs paid when buying; they form the invested capital.",
                ),
            );
            egui::Grid::new("cost_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    label_with_tip(
                        ui,
                        &txt("gui.inputs.down_payment", "Down payment"),
                        &txt("gui.inputs.down_payment_tip", "Initial equity payment"),
                    );
                    ui.add(
                        egui::DragValue::new(&mut self.inputs.down_payment)
                            .speed(1000.0)
                            .clamp_range(0.0..=f64::MAX)
                            .prefix(symbol),
                    );
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.inputs.taxes", "Taxes"),
                        &txt("gui.inputs.taxes_tip", "Transfer and stamp taxes due at purchase"),
                    );
                    ui.add(
                        egui::DragValue::new(&mut self.inputs.taxes)
                            .speed(500.0)
                            .clamp_range(0.0..=f64::MAX)
                            .prefix(symbol),
                    );
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.inputs.other_costs", "Other costs"),
                        &txt("gui.inputs.other_costs_tip", "Notary, registration, agency fees"),
                    );
                    ui.add(
                        egui::DragValue::new(&mut self.inputs.other_costs)
                            .speed(500.0)
                            .clamp_range(0.0..=f64::MAX)
                            .prefix(symbol),
                    );
                    ui.end_row();
                });
        });

        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            heading_with_tip(
                ui,
                &txt("gui.inputs.investment", "Investment Parameters"),
                &txt(
                    "gui.inputs.investment_tip",
                    "Expected annual index-fund return on the same capital.",
                ),
            );
            ui.add(
                egui::Slider::new(&mut self.inputs.annual_return_pct, 1.0..=15.0)
                    .integer()
                    .suffix(" %"),
            );
        });

        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            heading_with_tip(
                ui,
                &txt("gui.inputs.rent_range", "Rent Analysis Range"),
                &txt(
                    "gui.inputs.rent_range_tip",
                    "Inclusive monthly-rent range swept with 50 samples.",
                ),
            );
            egui::Grid::new("rent_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    label_with_tip(
                        ui,
                        &txt("gui.inputs.min_rent", "Minimum rent"),
                        &txt("gui.inputs.min_rent_tip", "Lower end of the sweep"),
                    );
                    ui.add(
                        egui::DragValue::new(&mut self.inputs.min_rent)
                            .speed(50.0)
                            .clamp_range(0.0..=f64::MAX)
                            .prefix(symbol),
                    );
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.inputs.max_rent", "Maximum rent"),
                        &txt("gui.inputs.max_rent_tip", "Upper end of the sweep"),
                    );
                    ui.add(
                        egui::DragValue::new(&mut self.inputs.max_rent)
                            .speed(50.0)
                            .clamp_range(0.0..=f64::MAX)
                            .prefix(symbol),
                    );
                    ui.end_row();
                });
        });

        ui.add_space(12.0);
        if ui
            .button(txt("gui.inputs.reset", "Reset to defaults"))
            .clicked()
        {
            self.inputs = self.config.defaults.clone();
        }
    }

    /// 본문: 차트 + 요약.
    fn ui_analysis(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let cur = self.config.currency;

        // 매 프레임 전체 재계산. 입력 외 상태를 캐시하지 않는다.
        let result = breakeven::analyze(&self.inputs);

        heading_with_tip(
            ui,
            &txt("gui.chart.heading", "Visual Analysis"),
            &txt(
                "gui.chart.tip",
                "Monthly rent vs the monthly opportunity-cost return of the initial capital.",
            ),
        );
        ui.add_space(4.0);

        let (buying_pts, renting_pts) = verdict_segments(&result);
        let monthly = result.monthly_return;
        let rent_line: Vec<[f64; 2]> = result.samples.iter().map(|s| [s.rent, s.rent]).collect();
        let span = self.inputs.max_rent - self.inputs.min_rent;
        let note_pos = PlotPoint::new(
            self.inputs.min_rent + span * 0.1,
            monthly + span * 0.3,
        );
        let return_label = format!(
            "{} (≈{})",
            txt("gui.chart.return_line", "Monthly Return on Initial Investment"),
            cur.format(monthly)
        );

        Plot::new("breakeven_chart")
            .legend(Legend::default())
            .view_aspect(1.8)
            .x_axis_label(txt("gui.chart.x_label", "Monthly Rent"))
            .y_axis_label(txt("gui.chart.y_label", "Monthly Cost"))
            .show(ui, |plot_ui| {
                if buying_pts.len() >= 2 {
                    plot_ui.line(
                        Line::new(PlotPoints::from(buying_pts))
                            .color(egui::Color32::from_rgb(46, 139, 87))
                            .width(0.0)
                            .fill(monthly as f32)
                            .name(txt("gui.chart.favors_buying", "Favors Buying")),
                    );
                }
                if renting_pts.len() >= 2 {
                    plot_ui.line(
                        Line::new(PlotPoints::from(renting_pts))
                            .color(egui::Color32::from_rgb(205, 92, 92))
                            .width(0.0)
                            .fill(monthly as f32)
                            .name(txt("gui.chart.favors_renting", "Favors Renting")),
                    );
                }
                plot_ui.line(
                    Line::new(PlotPoints::from(rent_line))
                        .color(egui::Color32::from_rgb(65, 105, 225))
                        .name(txt("gui.chart.rent_line", "Cost of Renting")),
                );
                plot_ui.hline(
                    HLine::new(monthly)
                        .color(egui::Color32::from_rgb(220, 50, 47))
                        .style(LineStyle::dashed_loose())
                        .name(return_label.clone()),
                );
                plot_ui.text(Text::new(
                    note_pos,
                    txt(
                        "gui.chart.note",
                        "If rent > potential return: buy\nIf rent < potential return: rent",
                    ),
                ));
            });

        ui.add_space(12.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading(txt("gui.summary.heading", "Summary"));
            ui.separator();
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(txt("gui.summary.total_cost", "Total initial cost:"))
                        .strong(),
                );
                ui.label(cur.format(result.total_initial_cost));
            });
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(txt(
                        "gui.summary.monthly_return",
                        "Expected monthly return:",
                    ))
                    .strong(),
                );
                ui.label(cur.format(result.monthly_return));
            });
            ui.add_space(6.0);
            ui.label(fill_template(
                &txt(
                    "gui.summary.above",
                    "- If your monthly rent is above {amount}, buying tends to be more advantageous.",
                ),
                &[("amount", cur.format(result.monthly_return))],
            ));
            ui.label(fill_template(
                &txt(
                    "gui.summary.below",
                    "- If your monthly rent is below {amount}, renting tends to be more advantageous.",
                ),
                &[("amount", cur.format(result.monthly_return))],
            ));
            ui.add_space(6.0);
            legend_toggle(
                ui,
                &txt("gui.summary.note_title", "Model limitations"),
                &txt(
                    "gui.summary.note_body",
                    "Not included: property appreciation, maintenance, recurring property tax, condo fees, insurance, mortgage interest.",
                ),
                &mut self.show_model_note,
            );
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button(txt("gui.summary.export", "Export CSV")).clicked() {
                    if let Some(path) = FileDialog::new()
                        .set_file_name("buy_rent_analysis.csv")
                        .add_filter("CSV", &["csv"])
                        .save_file()
                    {
                        self.export_status = match export::write_csv(&path, &result, cur) {
                            Ok(()) => Some(fill_template(
                                &txt("gui.summary.export_done", "Exported to {path}"),
                                &[("path", path.display().to_string())],
                            )),
                            Err(e) => Some(format!(
                                "{}: {e}",
                                txt("gui.summary.export_error", "CSV export error")
                            )),
                        };
                    }
                }
                if let Some(status) = &self.export_status {
                    ui.small(status.clone());
                }
            });
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 최초 1회 화면 크기 조정
        if self.apply_initial_view_size {
            if let Some(screen) = ctx.input(|i| {
                let r = i.screen_rect();
                if r.is_positive() {
                    Some(r.size())
                } else {
                    None
                }
            }) {
                let target = egui::vec2((screen.x * 0.65).max(1000.0), (screen.y * 0.65).max(680.0));
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(target));
                self.apply_initial_view_size = false;
            }
        }

        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 테마 + 투명도 적용, 라벨 복사 방지
        let mut visuals = match self.theme {
            ThemeChoice::System => egui::Visuals::default(),
            ThemeChoice::Light => egui::Visuals::light(),
            ThemeChoice::Dark => egui::Visuals::dark(),
        };
        visuals.window_fill = visuals.window_fill.linear_multiply(self.window_alpha);
        visuals.panel_fill = visuals.panel_fill.linear_multiply(self.window_alpha);
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals = visuals;
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Buy vs Rent Decision Toolbox"));
                ui.label(" | Desktop GUI");
                ui.separator();
                if ui.button(txt("gui.method.button", "Method")).clicked() {
                    self.show_method_modal = true;
                }
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut new_currency = self.config.currency;
            egui::Window::new(txt("gui.settings.title", "Program Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    ui.separator();
                    ui.label(txt("gui.settings.currency", "Display currency"));
                    ui.horizontal(|ui| {
                        for option in currency_options() {
                            ui.selectable_value(&mut new_currency, *option, option.code());
                        }
                    });
                    ui.separator();
                    ui.label(txt("gui.settings.theme", "Theme"));
                    ui.horizontal(|ui| {
                        for (label, choice) in [
                            (txt("gui.settings.theme.system", "System"), ThemeChoice::System),
                            (txt("gui.settings.theme.light", "Light"), ThemeChoice::Light),
                            (txt("gui.settings.theme.dark", "Dark"), ThemeChoice::Dark),
                        ] {
                            ui.selectable_value(&mut self.theme, choice, label);
                        }
                    });
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(
                        &mut self.always_on_top,
                        txt("gui.settings.always_on_top", "Always on top"),
                    );
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));

                    ui.separator();
                    ui.label(txt("gui.settings.font", "Custom font (.ttf/.ttc)"));
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut self.custom_font_path);
                        if ui.button(txt("gui.settings.font_browse", "Browse")).clicked() {
                            if let Some(path) = FileDialog::new()
                                .add_filter("Font", &["ttf", "ttc", "otf"])
                                .pick_file()
                            {
                                self.custom_font_path = path.display().to_string();
                            }
                        }
                        if ui.button(txt("gui.settings.font_apply", "Apply")).clicked() {
                            self.font_load_error =
                                load_custom_font(ctx, &self.custom_font_path).err();
                        }
                    });
                    if let Some(err) = &self.font_load_error {
                        ui.colored_label(egui::Color32::LIGHT_RED, err);
                    }

                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang.auto", "System"),
                            );
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    ui.horizontal(|ui| {
                        ui.label(txt("gui.settings.lang_pack_dir", "Language pack dir"));
                        ui.text_edit_singleline(&mut self.lang_pack_dir_input);
                    });

                    ui.separator();
                    if ui
                        .button(txt("gui.settings.save_defaults", "Store current inputs as defaults"))
                        .clicked()
                    {
                        self.config.defaults = self.inputs.clone();
                    }
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.language_pack_dir = if self.lang_pack_dir_input.trim().is_empty()
                        {
                            None
                        } else {
                            Some(self.lang_pack_dir_input.trim().to_string())
                        };
                        self.config.window_alpha = self.window_alpha;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(
                            &self.config.language,
                            self.config.language_pack_dir.as_deref(),
                        );
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Err(e) = self.config.save() {
                            self.lang_save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.lang_save_status = Some(txt("gui.settings.saved", "Saved."));
                        }
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
            if new_currency != self.config.currency {
                self.config.currency = new_currency;
            }
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Compares renting against the opportunity cost of buying",
                    ));
                    ui.label(txt("gui.about.version", "Version: 0.2.1"));
                    ui.separator();
                    ui.label(txt("gui.about.howto.title", "How to use"));
                    ui.label(txt(
                        "gui.about.howto.inputs",
                        "1. Enter your initial costs, expected return and rent range in the sidebar.",
                    ));
                    ui.label(txt(
                        "gui.about.howto.chart",
                        "2. The chart shows the rent line, the dashed monthly-return line and the shaded regions where buying or renting wins.",
                    ));
                    ui.label(txt(
                        "gui.about.howto.summary",
                        "3. The summary section states the breakeven rent for your situation.",
                    ));
                });
        }

        if self.show_method_modal {
            egui::Window::new(txt("gui.method.title", "Method"))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_method_modal)
                .show(ctx, |ui| {
                    ui.style_mut().wrap = Some(true);
                    ui.heading(txt(
                        "gui.method.total",
                        "Total initial cost = down payment + taxes + other costs.",
                    ));
                    ui.label(txt(
                        "gui.method.monthly",
                        "Monthly return = total initial cost x (annual return / 100 / 12); simple pro-rating, no compounding.",
                    ));
                    ui.label(txt(
                        "gui.method.sweep",
                        "The rent range is sampled with 50 evenly spaced points, endpoints included.",
                    ));
                    ui.label(txt(
                        "gui.method.verdict",
                        "Each sample above the monthly return favors buying; below it favors renting; equal is the breakeven.",
                    ));
                });
        }

        // 좌측 입력 패널 + 본문
        egui::SidePanel::left("inputs")
            .resizable(true)
            .min_width(240.0)
            .default_width(300.0)
            .max_width(460.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        self.ui_inputs(ui);
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.ui_analysis(ui);
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_from_config_defaults() {
        let app = GuiApp::new(config::Config::default());
        assert_eq!(app.inputs, BreakevenInput::default());
        assert!((app.window_alpha - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn verdict_segments_split_at_breakeven() {
        // 50000 @ 10% => 월 기대수익 416.67, 구간 300~1200 양쪽에 걸친다.
        let result = breakeven::analyze(&BreakevenInput::default());
        let (buying, renting) = verdict_segments(&result);
        assert!(!buying.is_empty());
        assert!(!renting.is_empty());
        assert!(buying.iter().all(|p| p[1] > result.monthly_return));
        assert!(renting.iter().all(|p| p[1] < result.monthly_return));
        assert_eq!(buying.len() + renting.len(), result.samples.len());
    }

    #[test]
    fn fill_template_replaces_vars() {
        let out = fill_template(
            "above {amount}, buying wins",
            &[("amount", "€416.67".to_string())],
        );
        assert_eq!(out, "above €416.67, buying wins");
    }
}
