//! Command-line arguments of the demo binary.

use anyhow::{bail, Context};
use eng_linalg::vec3;

use crate::{camera::Camera, sections::Section};

pub const USAGE: &str = "usage: eng-demo [<section> [<time> [<yaw> <pitch> [<dx> <dy> <dz>]]]]";

/// Parsed arguments: what to print, at which point in time, and from where to look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Args {
    pub section: Section,
    /// Animation time in seconds.
    pub time: f32,
    /// The default camera, turned by `<yaw> <pitch>` and then moved by `<dx> <dy> <dz>`.
    pub camera: Camera,
}

impl Args {
    /// Parses the arguments following the program name.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Self> {
        let args = args.into_iter().collect::<Vec<_>>();

        let (section, rest) = match args.split_first() {
            Some((section, rest)) => (section.parse::<Section>().context(USAGE)?, rest),
            None => (Section::All, &args[..]),
        };
        let (time, rest) = match rest.split_first() {
            Some((time, rest)) => (number(time)?, rest),
            None => (0.0, rest),
        };

        let mut camera = Camera::default();
        let rest = match rest {
            [yaw, pitch, rest @ ..] => {
                camera.look(number(yaw)?, number(pitch)?);
                rest
            }
            _ => rest,
        };
        match rest {
            [] => {}
            [dx, dy, dz] => camera.translate(vec3(number(dx)?, number(dy)?, number(dz)?)),
            _ => bail!("{USAGE}"),
        }

        Ok(Self {
            section,
            time,
            camera,
        })
    }
}

fn number(arg: &str) -> anyhow::Result<f32> {
    arg.parse().with_context(|| format!("invalid number `{arg}`"))
}
