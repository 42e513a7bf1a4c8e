use image::{DynamicImage, Rgba, RgbaImage};
use std::path::Path;
use std::process::{Command, Output};

const SPRITES: [&str; 4] = ["Duck.png", "Chicken.png", "Goose.png", "Cow.png"];

fn split_sprite_sheet(project_root: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_split-sprite-sheet"))
        .current_dir(project_root)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn prints_completion_line_after_writing_sprites() {
    let root = tempfile::tempdir().unwrap();
    let textures = root.path().join("Assets/Textures");
    std::fs::create_dir_all(&textures).unwrap();
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(512, 512, Rgba([0, 128, 0, 255])))
        .save(textures.join("AnimalsSpriteSheet.png"))
        .unwrap();

    let output = split_sprite_sheet(root.path());

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Splitting complete.\n");
    for name in SPRITES {
        let sprite = image::open(textures.join(name)).unwrap();
        assert_eq!((sprite.width(), sprite.height()), (256, 256));
    }
}

#[test]
fn missing_sheet_fails_without_output() {
    let root = tempfile::tempdir().unwrap();
    let textures = root.path().join("Assets/Textures");
    std::fs::create_dir_all(&textures).unwrap();

    let output = split_sprite_sheet(root.path());

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "{:?}", output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("AnimalsSpriteSheet.png"));
    assert_eq!(std::fs::read_dir(&textures).unwrap().count(), 0);
}
