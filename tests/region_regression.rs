//! Pinned region-detection vectors loaded from `tests/fixtures/regions.json`.

use rgbamatch::{
    find_pillars, find_puddle_with, reset_puddles, ColorRange, Connectivity, OwnedRgba, Pillar,
    Point,
};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct Fixture {
    scenes: Vec<Scene>,
}

#[derive(Debug, Deserialize)]
struct Rect {
    x: usize,
    y: usize,
    w: usize,
    h: usize,
    color: [u8; 4],
}

#[derive(Debug, Deserialize)]
struct RangeJson {
    min_red: u8,
    max_red: u8,
    min_green: u8,
    max_green: u8,
    min_blue: u8,
    max_blue: u8,
}

impl From<&RangeJson> for ColorRange {
    fn from(value: &RangeJson) -> Self {
        ColorRange::new(
            (value.min_red, value.max_red),
            (value.min_green, value.max_green),
            (value.min_blue, value.max_blue),
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ConnectivityJson {
    FourWay,
    EightWay,
}

impl From<&ConnectivityJson> for Connectivity {
    fn from(value: &ConnectivityJson) -> Self {
        match value {
            ConnectivityJson::FourWay => Connectivity::FourWay,
            ConnectivityJson::EightWay => Connectivity::EightWay,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PillarCase {
    k: usize,
    expected: Vec<[i32; 4]>,
}

#[derive(Debug, Deserialize)]
struct PuddleCase {
    connectivity: ConnectivityJson,
    start_row: usize,
    capacity: usize,
    sizes: Vec<usize>,
    #[serde(default)]
    points: Vec<[i32; 2]>,
}

#[derive(Debug, Deserialize)]
struct Scene {
    name: String,
    width: usize,
    height: usize,
    background: [u8; 4],
    paint: Vec<Rect>,
    range: RangeJson,
    pillars: Vec<PillarCase>,
    puddles: Vec<PuddleCase>,
}

impl Scene {
    fn render(&self) -> OwnedRgba {
        let mut img = OwnedRgba::filled(self.width, self.height, self.background).unwrap();
        for rect in &self.paint {
            for y in rect.y..rect.y + rect.h {
                for x in rect.x..rect.x + rect.w {
                    img.put_pixel(x, y, rect.color);
                }
            }
        }
        img
    }
}

fn load_fixture() -> Fixture {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/regions.json");
    let text = fs::read_to_string(&path).expect("read regions fixture");
    serde_json::from_str(&text).expect("parse regions fixture")
}

#[test]
fn pillar_vectors() {
    for scene in load_fixture().scenes {
        let img = scene.render();
        let range = ColorRange::from(&scene.range);
        for case in &scene.pillars {
            let mut out = vec![Pillar::default(); case.k];
            let filled = find_pillars(img.view(), range, &mut out).unwrap();
            let got: Vec<[i32; 4]> = out.iter().map(|p| p.to_array()).collect();
            assert_eq!(got, case.expected, "scene {} k={}", scene.name, case.k);
            assert_eq!(
                filled,
                case.expected.iter().filter(|p| p[0] > 0).count(),
                "scene {}",
                scene.name
            );
        }
    }
}

#[test]
fn puddle_vectors() {
    for scene in load_fixture().scenes {
        let mut img = scene.render();
        let pristine = img.clone();
        let range = ColorRange::from(&scene.range);
        for case in &scene.puddles {
            let connectivity = Connectivity::from(&case.connectivity);
            let mut out = vec![Point::default(); case.capacity];
            let mut sizes = Vec::new();
            for call in 0..case.sizes.len() {
                let n = find_puddle_with(
                    &mut img.view_mut(),
                    range,
                    case.start_row,
                    connectivity,
                    &mut out,
                )
                .unwrap();
                sizes.push(n);
                if call == 0 && !case.points.is_empty() {
                    let points: Vec<[i32; 2]> = out[..n].iter().map(|p| [p.x, p.y]).collect();
                    assert_eq!(points, case.points, "scene {}", scene.name);
                }
            }
            assert_eq!(sizes, case.sizes, "scene {} {:?}", scene.name, case.connectivity);

            reset_puddles(&mut img.view_mut());
            assert_eq!(img, pristine);
        }
    }
}
