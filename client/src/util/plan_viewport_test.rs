use super::*;
use deckplan::camera::Rect;

fn engine() -> EngineCore {
    let mut engine = EngineCore::new(Rect::new(100.0, 50.0, 400.0, 200.0));
    engine.set_viewport(1000.0, 600.0);
    engine
}

#[test]
fn crop_window_is_centred_at_default_zoom() {
    assert_eq!(crop_window_style(&engine()), "left:300.00px;top:200.00px;width:400.00px;height:200.00px;");
}

#[test]
fn plan_image_shifts_by_crop_origin_and_scales() {
    let mut engine = engine();
    engine.set_zoom(200);
    assert_eq!(
        plan_image_style(&engine, Size::new(3200.0, 900.0)),
        "left:-200.00px;top:-100.00px;width:6400.00px;height:1800.00px;"
    );
}

#[test]
fn pin_follows_pan() {
    let mut engine = engine();
    assert_eq!(pin_style(&engine, Point::new(100.0, 50.0)), "left:300.00px;top:200.00px;");
    engine.camera.pan_by(10.0, -5.0);
    assert_eq!(pin_style(&engine, Point::new(100.0, 50.0)), "left:310.00px;top:195.00px;");
}

#[test]
fn zoom_label_shows_percent() {
    let mut engine = engine();
    assert_eq!(zoom_label(&engine), "100%");
    engine.zoom_in();
    assert_eq!(zoom_label(&engine), "110%");
}
