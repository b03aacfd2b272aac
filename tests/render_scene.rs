use vitrine::{
    AssetStore, CanvasSize, LayoutProfile, Painter, Point, PreparedImage, SceneState, render_frame,
};

fn solid_image(w: u32, h: u32, rgba: [u8; 4]) -> PreparedImage {
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for _ in 0..w * h {
        data.extend_from_slice(&rgba);
    }
    PreparedImage::from_straight_rgba(w, h, data).unwrap()
}

fn two_tone_image(w: u32, h: u32, left: [u8; 4], right: [u8; 4]) -> PreparedImage {
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for _ in 0..h {
        for x in 0..w {
            data.extend_from_slice(if x < w / 2 { &left } else { &right });
        }
    }
    PreparedImage::from_straight_rgba(w, h, data).unwrap()
}

fn scene_400() -> SceneState {
    let mut scene = SceneState::default();
    scene.canvas = CanvasSize::new(400, 400).unwrap();
    scene
}

#[test]
fn frame_matches_canvas_and_is_premultiplied() {
    let scene = SceneState::default();
    let assets = AssetStore::empty();
    let mut painter = Painter::new();

    let frame = render_frame(&scene, &assets, &mut painter).unwrap();
    assert_eq!(frame.width, 900);
    assert_eq!(frame.height, 1080);
    assert_eq!(frame.data.len(), 900 * 1080 * 4);
    assert!(frame.premultiplied);
}

#[test]
fn identical_scenes_render_identical_bytes() {
    let scene = scene_400();
    let assets = AssetStore::empty();

    let mut painter = Painter::new();
    let first = render_frame(&scene, &assets, &mut painter).unwrap();
    let second = render_frame(&scene, &assets, &mut painter).unwrap();
    assert_eq!(first.data, second.data);

    // A fresh painter (cold blur-kernel cache) must not change the output.
    let mut fresh = Painter::new();
    let third = render_frame(&scene, &assets, &mut fresh).unwrap();
    assert_eq!(first.data, third.data);
}

#[test]
fn missing_background_fills_dark_fallback() {
    let scene = scene_400();
    let frame = render_frame(&scene, &AssetStore::empty(), &mut Painter::new()).unwrap();
    // Above the footer panel, the untouched backdrop shows the fallback.
    assert_eq!(frame.pixel(200, 50), [17, 17, 17, 255]);
    assert_eq!(frame.pixel(5, 100), [17, 17, 17, 255]);
}

#[test]
fn background_cover_fit_and_offset_pan() {
    let red = [200, 10, 10, 255];
    let blue = [10, 10, 200, 255];
    // 800x400 into a 400x400 canvas: cover keeps scale 1 and centers
    // horizontally, so the tone boundary lands mid-canvas.
    let assets = AssetStore::empty().with_background(two_tone_image(800, 400, red, blue));
    let mut painter = Painter::new();

    let scene = scene_400();
    let frame = render_frame(&scene, &assets, &mut painter).unwrap();
    assert_eq!(frame.pixel(100, 50), red);
    assert_eq!(frame.pixel(300, 50), blue);

    // Panning right by 60 moves the boundary from x=200 to x=260.
    let mut panned = scene_400();
    panned.background_offset = vitrine::Vec2::new(60.0, 0.0);
    let frame = render_frame(&panned, &assets, &mut painter).unwrap();
    assert_eq!(frame.pixel(250, 50), red);
    assert_eq!(frame.pixel(270, 50), blue);
}

#[test]
fn logo_clips_to_circle() {
    let green = [20, 200, 20, 255];
    let assets = AssetStore::empty().with_logo(solid_image(10, 10, green));

    let mut scene = scene_400();
    scene.logo_position = Point::new(100.0, 100.0);

    let frame = render_frame(&scene, &assets, &mut Painter::new()).unwrap();
    // Inside the 100px circle the cover-fitted logo shows through.
    assert_eq!(frame.pixel(100, 100), green);
    assert_eq!(frame.pixel(100, 60), green);
    // Inside the bounding square but outside the circle, the backdrop stays.
    assert_eq!(frame.pixel(149, 149), [17, 17, 17, 255]);
}

#[test]
fn layout_profiles_shape_the_subject_box() {
    let white = [255, 255, 255, 255];
    let mut scene = scene_400();
    scene.style.image_size = 100;
    scene.style.shadow_strength = 0;
    scene.install_pasted(solid_image(8, 4, white), 1);
    // Install centers the subject; move it clear of the footer panel.
    scene.pasted_image_position = Point::new(200.0, 100.0);

    let assets = AssetStore::empty();
    let mut painter = Painter::new();

    // Expanded contains the 2:1 image in a 100x50 box.
    let frame = render_frame(&scene, &assets, &mut painter).unwrap();
    assert_eq!(frame.pixel(200, 100), white);
    assert_eq!(frame.pixel(200, 60), [17, 17, 17, 255]);

    // Compact cover-crops it into the full 100x100 square.
    scene.layout = LayoutProfile::Compact;
    let compact = render_frame(&scene, &assets, &mut painter).unwrap();
    assert_eq!(compact.pixel(200, 60), white);
    assert_ne!(frame.data, compact.data);
}

#[test]
fn footer_panel_darkens_and_draws_glyphs() {
    let frame = render_frame(&scene_400(), &AssetStore::empty(), &mut Painter::new()).unwrap();

    // 400x400 canvas: panel spans y in 176..376. The scrim darkens the
    // blurred backdrop well below the raw fallback gray.
    let inside = frame.pixel(200, 280);
    assert_eq!(inside[3], 255);
    assert!(inside[0] < 17, "scrim should darken the panel: {inside:?}");

    // Glyph strokes render without any font. First grid anchor sits at
    // (padding-inset + 10, first baseline - 5): (62, 294) here, with the
    // processor square's top edge 7px above its center.
    let on_stroke = frame.pixel(62, 287);
    assert!(
        on_stroke[0] > 80,
        "expected bright glyph stroke, got {on_stroke:?}"
    );
}

#[test]
fn shadow_strength_zero_skips_the_halo() {
    let white = [255, 255, 255, 255];
    let mut scene = scene_400();
    scene.style.image_size = 100;
    scene.style.border_radius = 0;
    scene.install_pasted(solid_image(8, 8, white), 1);
    scene.pasted_image_position = Point::new(200.0, 100.0);

    let assets = AssetStore::empty();
    let mut painter = Painter::new();

    scene.style.shadow_strength = 0;
    let plain = render_frame(&scene, &assets, &mut painter).unwrap();
    // Just outside the box at y=40 the backdrop is untouched.
    assert_eq!(plain.pixel(200, 40), [17, 17, 17, 255]);

    scene.style.shadow_strength = 40;
    let shadowed = render_frame(&scene, &assets, &mut painter).unwrap();
    let halo = shadowed.pixel(200, 40);
    assert!(
        halo[0] < 17,
        "black shadow should darken outside the box: {halo:?}"
    );
}
