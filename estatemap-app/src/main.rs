use anyhow::Context as _;
use estatemap::{
    ui::{style::MapViewStyle, widget::MapWidget},
    LabelProfile, LocationInput, MapViewConfig,
};

/// One listing shown in the viewer
struct Property {
    title: &'static str,
    price: &'static str,
    location: LocationInput,
}

fn presets() -> Vec<Property> {
    vec![
        Property {
            title: "Apartment near the cathedral",
            price: "R$ 420.000",
            location: LocationInput::new(
                -22.3246,
                -49.0871,
                "Rua Primeiro de Agosto, 5-50, Centro, Bauru",
            ),
        },
        Property {
            title: "House with garden",
            price: "R$ 780.000",
            location: LocationInput::new(
                -22.1256,
                -51.3889,
                "Av. Washington Luiz, Vila Nova, Presidente Prudente",
            ),
        },
        // No coordinates on file; placed near the city centre
        Property {
            title: "Studio, coordinates pending",
            price: "R$ 215.000",
            location: LocationInput::from_property_parts(
                "Rua Sete de Setembro, 120",
                "Jardim Paulista",
                "Marília",
                "listing-3107",
            ),
        },
        Property {
            title: "Penthouse with a very long address line",
            price: "R$ 1.350.000",
            location: LocationInput::new(
                -23.5614,
                -46.6559,
                "Alameda Joaquim Eugênio de Lima, 1234, Apartamento 241, Bloco B, Jardim Paulista, São Paulo, SP, 01403-001",
            ),
        },
    ]
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => MapViewConfig::from_json_file(&path)
            .with_context(|| format!("failed to load map config from {}", path))?,
        None => MapViewConfig::default(),
    };
    log::info!("starting viewer with {:?}", config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title("estatemap - property viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "estatemap-app",
        options,
        Box::new(move |_cc| Box::new(ViewerApp::new(config))),
    )
    .map_err(|err| anyhow::anyhow!("viewer exited with an error: {}", err))?;

    Ok(())
}

struct ViewerApp {
    properties: Vec<Property>,
    selected: usize,
    config: MapViewConfig,
    dark_map: bool,
    show_debug_panel: bool,
}

impl ViewerApp {
    fn new(config: MapViewConfig) -> Self {
        Self {
            properties: presets(),
            selected: 0,
            config,
            dark_map: false,
            show_debug_panel: true,
        }
    }

    fn current(&self) -> &Property {
        &self.properties[self.selected.min(self.properties.len() - 1)]
    }

    fn map_widget(&self) -> MapWidget {
        let style = if self.dark_map {
            MapViewStyle::dark()
        } else {
            MapViewStyle::default()
        };
        MapWidget::from_location(self.current().location.clone())
            .config(self.config.clone())
            .style(style)
    }

    fn property_picker(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Listings:");
            for (index, property) in self.properties.iter().enumerate() {
                if ui
                    .selectable_label(self.selected == index, property.title)
                    .clicked()
                {
                    self.selected = index;
                }
            }
        });
    }

    fn label_profile_picker(&mut self, ui: &mut egui::Ui) {
        ui.label("Coordinate labels:");
        let profile = &mut self.config.label_profile;
        ui.radio_value(profile, LabelProfile::Compact, "Compact (4 decimals)");
        ui.radio_value(profile, LabelProfile::Detailed, "Detailed (5 decimals)");
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug_panel, "Viewport Panel");
                    ui.checkbox(&mut self.dark_map, "Dark map");
                    ui.checkbox(&mut self.config.show_controls, "Map controls");
                    ui.checkbox(&mut self.config.show_disclaimer, "Disclaimer");
                    ui.checkbox(&mut self.config.interactive, "Interactive");
                    ui.checkbox(&mut self.config.pan_on_drag, "Drag to pan");
                    ui.checkbox(&mut self.config.zoom_on_wheel, "Wheel zoom");
                });
                ui.separator();
                self.property_picker(ui);
            });
        });

        let widget = self.map_widget();

        if self.show_debug_panel {
            egui::SidePanel::left("viewport_panel")
                .resizable(true)
                .show(ctx, |ui| {
                    ui.heading("Viewport");
                    ui.separator();

                    match MapWidget::load_state(ctx, widget.state_id()) {
                        Some(view) => {
                            let viewport = view.viewport();
                            ui.label(format!("Zoom: {:.1}x", viewport.zoom));
                            ui.label(format!(
                                "Pan: {:.0}, {:.0}",
                                viewport.pan_offset.x, viewport.pan_offset.y
                            ));
                            ui.label(format!("Dragging: {}", view.drag_state().is_dragging()));
                            ui.label(view.coordinate_label());
                        }
                        None => {
                            ui.label("Map not shown yet");
                        }
                    }

                    ui.separator();
                    self.label_profile_picker(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let property = self.current();
            ui.heading(property.title);
            ui.label(property.price);
            ui.label(&property.location.address);
            ui.add_space(8.0);
            ui.add(widget);
        });
    }
}
