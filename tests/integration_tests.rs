#![cfg(feature = "egui")]

/// Integration tests that drive the widget through a headless egui context,
/// the way a host application would
#[cfg(test)]
mod integration_tests {
    use egui::{Context, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};
    use estatemap::{ui::widget::MapWidget, MapView, MapViewConfig, Point};

    const SCREEN: Vec2 = Vec2::new(800.0, 600.0);
    const MAP_SIZE: Vec2 = Vec2::new(400.0, 300.0);

    fn context() -> Context {
        #[cfg(feature = "debug")]
        estatemap::init_logging();
        Context::default()
    }

    fn widget() -> MapWidget {
        MapWidget::new(-22.12, -49.94, "Rua Gustavo Maciel, 8-25, Centro, Bauru").size(MAP_SIZE)
    }

    /// Runs one frame and returns the rect the map was laid out in
    fn run_frame(ctx: &Context, frame: u32, events: Vec<Event>, widget: MapWidget) -> Rect {
        let raw_input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, SCREEN)),
            time: Some(f64::from(frame) * 0.016),
            events,
            ..Default::default()
        };

        let mut rect = Rect::NOTHING;
        let _ = ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                rect = ui.add(widget.clone()).rect;
            });
        });
        rect
    }

    /// Runs one frame with the map at the top of a long scrolling page and
    /// returns the map rect and the page's scroll offset
    fn run_page_frame(ctx: &Context, frame: u32, events: Vec<Event>) -> (Rect, f32) {
        let raw_input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, SCREEN)),
            time: Some(f64::from(frame) * 0.016),
            events,
            ..Default::default()
        };

        let mut rect = Rect::NOTHING;
        let mut offset = 0.0;
        let _ = ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let output = egui::ScrollArea::vertical().show(ui, |ui| {
                    rect = ui.add(widget()).rect;
                    ui.add_space(3000.0);
                });
                offset = output.state.offset.y;
            });
        });
        (rect, offset)
    }

    /// Scrolls one wheel tick down at `pos` and lets egui's smooth scrolling run out
    fn scroll_page_at(ctx: &Context, pos: Pos2) -> f32 {
        run_page_frame(ctx, 1, vec![Event::PointerMoved(pos)]);
        run_page_frame(
            ctx,
            2,
            vec![Event::PointerMoved(pos), Event::Scroll(Vec2::new(0.0, -50.0))],
        );
        let mut offset = 0.0;
        for frame in 3..43 {
            offset = run_page_frame(ctx, frame, Vec::new()).1;
        }
        offset
    }

    /// Hover, press and release on `pos` over three frames
    fn click(ctx: &Context, first_frame: u32, pos: Pos2) {
        run_frame(ctx, first_frame, vec![Event::PointerMoved(pos)], widget());
        run_frame(ctx, first_frame + 1, vec![press(pos, true)], widget());
        run_frame(ctx, first_frame + 2, vec![press(pos, false)], widget());
    }

    /// Centre of the n-th button in the top-right stack
    fn button_center(rect: Rect, index: usize) -> Pos2 {
        rect.right_top() + Vec2::new(-8.0 - 15.0, 8.0 + 15.0 + index as f32 * 35.0)
    }

    fn press(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    fn state(ctx: &Context) -> MapView {
        MapWidget::load_state(ctx, widget().state_id()).expect("map state stored in memory")
    }

    #[test]
    fn test_first_frame_mounts_default_view() {
        let ctx = context();
        let rect = run_frame(&ctx, 0, Vec::new(), widget());

        assert_eq!(rect.size(), MAP_SIZE);
        let view = state(&ctx);
        assert!(view.viewport().is_default());
        assert_eq!(view.coordinate_label(), "Lat: -22.1200, Lng: -49.9400");
    }

    #[test]
    fn test_drag_pans_the_map() {
        let ctx = context();
        let rect = run_frame(&ctx, 0, Vec::new(), widget());
        let start = rect.center();
        let end = start + Vec2::new(20.0, 30.0);

        run_frame(&ctx, 1, vec![Event::PointerMoved(start)], widget());
        run_frame(&ctx, 2, vec![press(start, true)], widget());
        run_frame(&ctx, 3, vec![Event::PointerMoved(end)], widget());
        run_frame(&ctx, 4, vec![press(end, false)], widget());
        run_frame(&ctx, 5, Vec::new(), widget());

        let view = state(&ctx);
        assert_eq!(view.viewport().pan_offset.x, 20.0);
        assert_eq!(view.viewport().pan_offset.y, 30.0);
        assert_eq!(view.viewport().zoom, 1.0);
        assert!(!view.drag_state().is_dragging());
    }

    #[test]
    fn test_every_control_button_clicks() {
        let ctx = context();
        let rect = run_frame(&ctx, 0, Vec::new(), widget());
        let (zoom_in, zoom_out, reset) = (
            button_center(rect, 0),
            button_center(rect, 1),
            button_center(rect, 2),
        );

        click(&ctx, 1, zoom_in);
        assert_eq!(state(&ctx).viewport().zoom, 1.2);
        click(&ctx, 4, zoom_in);
        assert_eq!(state(&ctx).viewport().zoom, 1.4);
        click(&ctx, 7, zoom_out);
        assert_eq!(state(&ctx).viewport().zoom, 1.2);

        let mut view = state(&ctx);
        view.pan(15.0, -10.0);
        ctx.memory_mut(|mem| mem.data.insert_temp(widget().state_id(), view));

        click(&ctx, 10, reset);
        let view = state(&ctx);
        assert!(view.viewport().is_default());
        assert!(!view.drag_state().is_dragging());
    }

    #[test]
    fn test_dragging_off_a_button_does_not_pan() {
        let ctx = context();
        let rect = run_frame(&ctx, 0, Vec::new(), widget());
        let button = button_center(rect, 0);
        let center = rect.center();

        run_frame(&ctx, 1, vec![Event::PointerMoved(button)], widget());
        run_frame(&ctx, 2, vec![press(button, true)], widget());
        run_frame(&ctx, 3, vec![Event::PointerMoved(center)], widget());
        run_frame(&ctx, 4, vec![press(center, false)], widget());
        run_frame(&ctx, 5, Vec::new(), widget());

        let view = state(&ctx);
        assert_eq!(view.viewport().pan_offset.x, 0.0);
        assert_eq!(view.viewport().pan_offset.y, 0.0);
        assert!(!view.drag_state().is_dragging());
    }

    #[test]
    fn test_scroll_over_map_zooms() {
        let ctx = context();
        let rect = run_frame(&ctx, 0, Vec::new(), widget());
        let center = rect.center();

        run_frame(&ctx, 1, vec![Event::PointerMoved(center)], widget());
        run_frame(
            &ctx,
            2,
            vec![
                Event::PointerMoved(center),
                Event::Scroll(Vec2::new(0.0, 50.0)),
            ],
            widget(),
        );

        assert_eq!(state(&ctx).viewport().zoom, 1.2);
    }

    #[test]
    fn test_scroll_outside_map_is_ignored() {
        let ctx = context();
        run_frame(&ctx, 0, Vec::new(), widget());
        let outside = Pos2::new(780.0, 580.0);

        run_frame(&ctx, 1, vec![Event::PointerMoved(outside)], widget());
        run_frame(
            &ctx,
            2,
            vec![
                Event::PointerMoved(outside),
                Event::Scroll(Vec2::new(0.0, 50.0)),
            ],
            widget(),
        );

        assert_eq!(state(&ctx).viewport().zoom, 1.0);
    }

    #[test]
    fn test_wheel_over_map_never_scrolls_the_page() {
        let ctx = context();
        let (rect, _) = run_page_frame(&ctx, 0, Vec::new());

        let offset = scroll_page_at(&ctx, rect.center());

        assert_eq!(state(&ctx).viewport().zoom, 0.8);
        assert_eq!(offset, 0.0);
    }

    #[test]
    fn test_wheel_beside_map_scrolls_the_page() {
        let ctx = context();
        let (rect, _) = run_page_frame(&ctx, 0, Vec::new());

        let offset = scroll_page_at(&ctx, Pos2::new(rect.center().x, rect.bottom() + 100.0));

        assert_eq!(state(&ctx).viewport().zoom, 1.0);
        assert!(offset > 0.0, "page did not scroll: {}", offset);
    }

    #[test]
    fn test_config_change_keeps_viewport() {
        let ctx = context();
        run_frame(&ctx, 0, Vec::new(), widget());

        let mut view = state(&ctx);
        view.zoom_in();
        ctx.memory_mut(|mem| mem.data.insert_temp(widget().state_id(), view));

        run_frame(&ctx, 1, Vec::new(), widget().config(MapViewConfig::detailed()));

        let view = state(&ctx);
        assert_eq!(view.viewport().zoom, 1.2);
        assert_eq!(view.coordinate_label(), "Lat: -22.12000, Lng: -49.94000");
    }

    #[test]
    fn test_zero_sized_map_still_mounts() {
        let ctx = context();
        let rect = run_frame(&ctx, 0, Vec::new(), widget().size(Vec2::ZERO));

        assert_eq!(rect.width(), 0.0);
        let view = state(&ctx);
        assert!(view.scene(Point::new(0.0, 0.0)).is_none());
    }
}
