//! JSON scene description.
//!
//! A scene file names a camera, lights, objects with nested textures, and
//! optional render settings. Vectors and colours are written as
//! three-element arrays.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stingray_math::{Colour, Vector};
use stingray_renderer::{
    AntiAlias, Camera, CheckerTexture, CsgDifference, CsgIntersection, Finish, Geometry, Light,
    PlainTexture, Plane, RenderConfig, RotatedTexture, Sphere, Stage, Texture, MAX_RECURSE,
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SceneFile {
    pub camera: CameraData,
    #[serde(default)]
    pub lights: Vec<LightData>,
    #[serde(default)]
    pub objects: Vec<ObjectData>,
    #[serde(default)]
    pub render: RenderData,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CameraData {
    pub position: [f64; 3],
    pub look_at: [f64; 3],
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LightData {
    pub position: [f64; 3],
    #[serde(default = "white")]
    pub colour: [f32; 3],
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectData {
    Sphere {
        centre: [f64; 3],
        radius: f64,
        #[serde(default)]
        texture: TextureData,
    },
    Plane {
        normal: [f64; 3],
        offset: f64,
        #[serde(default)]
        texture: TextureData,
    },
    Intersection {
        first: Box<ObjectData>,
        second: Box<ObjectData>,
        #[serde(default)]
        texture: TextureData,
    },
    Difference {
        primary: Box<ObjectData>,
        clip: Box<ObjectData>,
        #[serde(default)]
        texture: TextureData,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextureData {
    Plain {
        colour: [f32; 3],
        #[serde(default)]
        finish: FinishData,
    },
    Checker {
        first: Box<TextureData>,
        second: Box<TextureData>,
        size: f64,
    },
    Rotated {
        texture: Box<TextureData>,
        axis: [f64; 3],
        degrees: f64,
    },
}

impl Default for TextureData {
    fn default() -> Self {
        TextureData::Plain {
            colour: white(),
            finish: FinishData::default(),
        }
    }
}

/// Either a preset name or explicit coefficients.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum FinishData {
    Preset(FinishPreset),
    Custom {
        ambient: f64,
        diffuse: f64,
        shininess: i32,
        #[serde(default)]
        reflection: f64,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum FinishPreset {
    Matte,
    Shiny,
    Mirror,
}

impl Default for FinishData {
    fn default() -> Self {
        FinishData::Preset(FinishPreset::Matte)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RenderData {
    #[serde(default = "default_size")]
    pub width: u32,
    #[serde(default = "default_size")]
    pub height: u32,
    #[serde(default)]
    pub antialias: AntiAliasData,
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    #[serde(default)]
    pub background: [f32; 3],
}

impl Default for RenderData {
    fn default() -> Self {
        Self {
            width: default_size(),
            height: default_size(),
            antialias: AntiAliasData::default(),
            max_depth: default_max_depth(),
            background: [0.0; 3],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AntiAliasData {
    #[default]
    Off,
    Pair,
    Quad,
}

fn white() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn default_size() -> u32 {
    800
}

fn default_max_depth() -> u32 {
    MAX_RECURSE
}

impl SceneFile {
    /// Read and parse a scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let scene = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(scene)
    }

    /// Build the stage this file describes.
    pub fn to_stage(&self) -> Result<Stage> {
        let camera = Camera::new(
            Vector::from(self.camera.position),
            Vector::from(self.camera.look_at),
        )
        .context("Invalid camera")?;

        let mut stage = Stage::new(camera);

        for light in &self.lights {
            stage.add_light(Light::new(
                Vector::from(light.position),
                Colour::from(light.colour),
            ));
        }

        for (index, object) in self.objects.iter().enumerate() {
            let geometry = object
                .to_geometry()
                .with_context(|| format!("Invalid object #{}", index))?;
            stage.add_geometry(geometry);
        }

        log::debug!(
            "Loaded {} objects and {} lights",
            self.objects.len(),
            self.lights.len()
        );

        Ok(stage)
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            max_depth: self.render.max_depth,
            miss: Colour::from(self.render.background),
            antialias: match self.render.antialias {
                AntiAliasData::Off => AntiAlias::Off,
                AntiAliasData::Pair => AntiAlias::Pair,
                AntiAliasData::Quad => AntiAlias::Quad,
            },
        }
    }
}

impl ObjectData {
    fn to_geometry(&self) -> Result<Box<dyn Geometry>> {
        let geometry: Box<dyn Geometry> = match self {
            ObjectData::Sphere {
                centre,
                radius,
                texture,
            } => Box::new(Sphere::new(
                Vector::from(*centre),
                *radius,
                texture.to_texture()?,
            )),
            ObjectData::Plane {
                normal,
                offset,
                texture,
            } => Box::new(Plane::new(
                Vector::from(*normal),
                *offset,
                texture.to_texture()?,
            )?),
            ObjectData::Intersection {
                first,
                second,
                texture,
            } => Box::new(CsgIntersection::new(
                first.to_geometry()?,
                second.to_geometry()?,
                texture.to_texture()?,
            )),
            ObjectData::Difference {
                primary,
                clip,
                texture,
            } => Box::new(CsgDifference::new(
                primary.to_geometry()?,
                clip.to_geometry()?,
                texture.to_texture()?,
            )),
        };
        Ok(geometry)
    }
}

impl TextureData {
    fn to_texture(&self) -> Result<Arc<dyn Texture>> {
        let texture: Arc<dyn Texture> = match self {
            TextureData::Plain { colour, finish } => {
                Arc::new(PlainTexture::new(Colour::from(*colour), finish.to_finish()))
            }
            TextureData::Checker {
                first,
                second,
                size,
            } => Arc::new(CheckerTexture::new(
                first.to_texture()?,
                second.to_texture()?,
                *size,
            )),
            TextureData::Rotated {
                texture,
                axis,
                degrees,
            } => Arc::new(RotatedTexture::new(
                texture.to_texture()?,
                Vector::from(*axis),
                *degrees,
            )?),
        };
        Ok(texture)
    }
}

impl FinishData {
    fn to_finish(&self) -> Finish {
        match self {
            FinishData::Preset(FinishPreset::Matte) => Finish::MATTE,
            FinishData::Preset(FinishPreset::Shiny) => Finish::SHINY,
            FinishData::Preset(FinishPreset::Mirror) => Finish::MIRROR,
            FinishData::Custom {
                ambient,
                diffuse,
                shininess,
                reflection,
            } => Finish::new(*ambient, *diffuse, *shininess, *reflection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "camera": { "position": [0, 0, 0], "look_at": [0, 0, 1] },
        "lights": [ { "position": [0, 100, 0] } ],
        "objects": [
            { "type": "sphere", "centre": [0, 0, 100], "radius": 40 }
        ]
    }"#;

    #[test]
    fn test_minimal_scene_uses_defaults() {
        let scene: SceneFile = serde_json::from_str(MINIMAL).unwrap();

        assert_eq!(scene.render.width, 800);
        assert_eq!(scene.render.height, 800);
        assert_eq!(scene.render.antialias, AntiAliasData::Off);
        assert_eq!(scene.lights[0].colour, [1.0, 1.0, 1.0]);

        let config = scene.render_config();
        assert_eq!(config.max_depth, MAX_RECURSE);
        assert_eq!(config.miss, Colour::BLACK);

        let stage = scene.to_stage().unwrap();
        assert_eq!(stage.geometry().len(), 1);
        assert_eq!(stage.lights().len(), 1);
    }

    #[test]
    fn test_nested_objects_and_textures() {
        let json = r#"{
            "camera": { "position": [0, 60, -200], "look_at": [0, 20, 100] },
            "objects": [
                {
                    "type": "plane", "normal": [0, 1, 0], "offset": -40,
                    "texture": {
                        "type": "rotated", "axis": [0, 1, 0], "degrees": 45,
                        "texture": {
                            "type": "checker", "size": 50,
                            "first": { "type": "plain", "colour": [1, 1, 1] },
                            "second": { "type": "plain", "colour": [0, 0, 0], "finish": "shiny" }
                        }
                    }
                },
                {
                    "type": "difference",
                    "primary": { "type": "sphere", "centre": [0, 0, 60], "radius": 40 },
                    "clip": { "type": "sphere", "centre": [0, 0, 25], "radius": 25 },
                    "texture": {
                        "type": "plain", "colour": [1, 0, 0],
                        "finish": { "ambient": 0.2, "diffuse": 0.7, "shininess": 30 }
                    }
                }
            ],
            "render": { "width": 64, "height": 48, "antialias": "quad", "max_depth": 3 }
        }"#;

        let scene: SceneFile = serde_json::from_str(json).unwrap();
        assert_eq!(scene.render.width, 64);
        assert_eq!(scene.render.antialias, AntiAliasData::Quad);
        assert_eq!(scene.render_config().antialias, AntiAlias::Quad);
        assert_eq!(scene.render_config().max_depth, 3);

        match &scene.objects[1] {
            ObjectData::Difference { texture, .. } => match texture {
                TextureData::Plain { finish, .. } => {
                    assert_eq!(finish.to_finish(), Finish::new(0.2, 0.7, 30, 0.0));
                }
                other => panic!("unexpected texture {:?}", other),
            },
            other => panic!("unexpected object {:?}", other),
        }

        let stage = scene.to_stage().unwrap();
        assert_eq!(stage.geometry().len(), 2);
        assert!(stage.lights().is_empty());
    }

    #[test]
    fn test_degenerate_camera_rejected() {
        let json = r#"{ "camera": { "position": [1, 2, 3], "look_at": [1, 2, 3] } }"#;
        let scene: SceneFile = serde_json::from_str(json).unwrap();
        assert!(scene.to_stage().is_err());
    }

    #[test]
    fn test_zero_plane_normal_rejected() {
        let json = r#"{
            "camera": { "position": [0, 0, 0], "look_at": [0, 0, 1] },
            "objects": [ { "type": "plane", "normal": [0, 0, 0], "offset": 0 } ]
        }"#;
        let scene: SceneFile = serde_json::from_str(json).unwrap();
        let err = scene.to_stage().unwrap_err();
        assert!(err.to_string().contains("Invalid object #0"));
    }

    #[test]
    fn test_unknown_object_type() {
        let json = r#"{
            "camera": { "position": [0, 0, 0], "look_at": [0, 0, 1] },
            "objects": [ { "type": "torus", "radius": 1 } ]
        }"#;
        assert!(serde_json::from_str::<SceneFile>(json).is_err());
    }

    #[test]
    fn test_demo_scene_parses() {
        let json = include_str!("../scenes/demo.json");
        let scene: SceneFile = serde_json::from_str(json).unwrap();
        let stage = scene.to_stage().unwrap();
        assert!(!stage.geometry().is_empty());
        assert!(!stage.lights().is_empty());
    }
}
