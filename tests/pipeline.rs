use std::io::Cursor;
use hexagon_art::{
    color::Color,
    coloring::ColoringMode,
    layout::{GridSpec, Layout},
    mesh::{Canvas, HexagonStyle, Mesh},
    scene::{self, DrawInstruction},
    shell::{Preset, Shell},
    translate::GlossaryTranslator,
    types::Cell,
    CANVAS_SIZE,
};
use rand::{rngs::StdRng, SeedableRng};

/// Runs the prompts on the given answers and composes the scene
fn scene_from_answers(answers: &str) -> (usize, Vec<DrawInstruction>) {
    let mut output = Vec::new();
    let mut shell = Shell::new(Cursor::new(answers.as_bytes()), &mut output, GlossaryTranslator);
    let settings = shell.collect(&Preset::default()).expect("valid answers");

    let layout = Layout::new(&GridSpec::new(settings.n, CANVAS_SIZE as f64).expect("valid grid"));
    let scene = scene::compose(&layout, &settings.palette, settings.mode, &mut StdRng::seed_from_u64(1));
    (settings.n, scene)
}

#[test]
fn red_blue_classic_grid() {
    let (n, scene) = scene_from_answers("4\n1\n2\n1\n");
    assert_eq!(n, 4);
    assert_eq!(scene.len(), 16);

    let at = |row: usize, col: usize| scene[row * n + col].fill.to_string();
    assert_eq!(at(0, 0), "#FF0000");
    assert_eq!(at(0, 1), "#0000FF");
    assert_eq!(at(1, 1), "#FF0000");
    assert_eq!(at(1, 0), "#0000FF");
}

#[test]
fn retries_then_vertical_gradient_with_custom_colors() {
    // Out of range size, bad menu entry, custom hex, custom name, bad mode, then vertical gradient
    let (n, scene) = scene_from_answers("25\n5\n99\n12\n#000000\n12\nwhite\n9\n2\n");
    assert_eq!(n, 5);

    let black = Color::new(0, 0, 0);
    let white = Color::new(255, 255, 255);
    for (index, instruction) in scene.iter().enumerate() {
        let cell = Cell::from_index(index, n);
        let expected = match cell.get_row() {
            0 => black,
            4 => white,
            row => black.lerp(&white, row as f64 / 4.0),
        };
        assert_eq!(instruction.fill, expected, "{:?}", cell);
    }
    assert_eq!(scene[2 * n].fill, Color::new(128, 128, 128));
}

#[test]
fn mesh_holds_every_hexagon_in_order() {
    let (_, scene) = scene_from_answers("6\n3\n4\n4\n");
    let mut mesh = Mesh::new(HexagonStyle::default());
    mesh.draw_scene(&scene);

    let per_hexagon = mesh.len() / scene.len();
    assert_eq!(per_hexagon * scene.len(), mesh.len());
    for (index, instruction) in scene.iter().enumerate() {
        assert_eq!(mesh.get_vertices()[index * per_hexagon].color, instruction.fill.to_linear_rgba());
    }
}

#[test]
fn random_mode_uses_only_base_colors() {
    let (_, scene) = scene_from_answers("20\n8\n11\n4\n");
    let magenta = Color::from_name("magenta").unwrap();
    let brown = Color::from_name("brown").unwrap();
    assert_eq!(scene.len(), 400);
    assert!(scene.iter().all(|instruction| instruction.fill == magenta || instruction.fill == brown));
    assert_eq!(ColoringMode::Random.menu_number(), 4);
}
