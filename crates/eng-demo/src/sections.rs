//! The computations printed by the demo binary.

use std::{fmt, io::Write, str::FromStr};

use anyhow::bail;
use eng_linalg::{Complexf, Mat3f, Mat4f, Quatf, Vec2f, Vector};

use crate::{
    camera::Camera,
    cardioid::{Cardioid, FRAME_RATE},
};

/// A group of related computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Complex,
    Vector,
    Matrix,
    Quat,
    /// Model-view-projection matrix of a rotating model.
    Mvp,
    /// Points of a curve traced by a rolling circle.
    Cardioid,
    /// Every other section, in declaration order.
    All,
}

impl Section {
    /// All sections except [`Section::All`].
    pub const EACH: [Self; 6] = [
        Self::Complex,
        Self::Vector,
        Self::Matrix,
        Self::Quat,
        Self::Mvp,
        Self::Cardioid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Complex => "complex",
            Self::Vector => "vector",
            Self::Matrix => "matrix",
            Self::Quat => "quat",
            Self::Mvp => "mvp",
            Self::Cardioid => "cardioid",
            Self::All => "all",
        }
    }
}

impl FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Ok(match s {
            "complex" => Self::Complex,
            "vector" => Self::Vector,
            "matrix" => Self::Matrix,
            "quat" => Self::Quat,
            "mvp" => Self::Mvp,
            "cardioid" => Self::Cardioid,
            "all" => Self::All,
            _ => bail!(
                "unknown section `{s}` \
                 (expected one of complex, vector, matrix, quat, mvp, cardioid, all)"
            ),
        })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Writes the output of `section` to `out`.
///
/// `time` is the animation time in seconds. Only [`Section::Mvp`] depends on it and on `camera`.
pub fn run(
    section: Section,
    camera: &Camera,
    time: f32,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    log::debug!("running section `{section}`");
    match section {
        Section::Complex => complex(out),
        Section::Vector => vector(out),
        Section::Matrix => matrix(out),
        Section::Quat => quat(out),
        Section::Mvp => mvp(camera, time, out),
        Section::Cardioid => cardioid(out),
        Section::All => Section::EACH
            .into_iter()
            .try_for_each(|section| run(section, camera, time, out)),
    }
}

fn complex(out: &mut dyn Write) -> anyhow::Result<()> {
    let num1 = Complexf::new(1.3, 0.5);
    let num2 = num1 * 4.0;
    let num3 = num2 / 4.0;
    writeln!(out, "{num1}")?;
    writeln!(out, "{num2}")?;
    writeln!(out, "{num3}")?;
    writeln!(out, "{}", num2.length())?;

    let num4 = Complexf::new(3.0, 5.0);
    writeln!(out, "{num4}")?;
    writeln!(out, "{}", num4.length())?;
    writeln!(out, "{}", num4.normalize())?;
    writeln!(out, "{}", num4.normalize().length())?;
    Ok(())
}

fn vector(out: &mut dyn Write) -> anyhow::Result<()> {
    let v1 = Vector::from([1.0f32, 2.0, 3.0, 4.0, 5.0]);
    let v2 = Vector::from([1.0f32, 2.0, 3.0, 4.0, 5.0]);
    writeln!(out, "{}", v1 - v2)?;

    let v4 = Vec2f::X;
    let v5 = Vec2f::Y;
    writeln!(out, "{}", v4 * v5)?;
    Ok(())
}

fn matrix(out: &mut dyn Write) -> anyhow::Result<()> {
    let mat1 = Mat4f::from_scalar(1.0);
    let mut mat2 = mat1;
    mat2[0][0] = 0.6;

    // The 9-value lists fill the matrices in storage order.
    let mat3 = Mat3f::from_columns([[4.0, 0.0, 0.0], [2.0, 8.0, 1.0], [0.0, 1.0, 0.0]]);
    let mat4 = Mat3f::from_columns([[4.0, 2.0, 9.0], [2.0, 0.0, 4.0], [1.0, 4.0, 2.0]]);
    let mat5 = mat3 * mat4;

    writeln!(out, "{mat1}")?;
    writeln!(out, "{mat2}")?;
    writeln!(out, "{mat1}")?;
    writeln!(out, "{mat5}")?;
    Ok(())
}

fn quat(out: &mut dyn Write) -> anyhow::Result<()> {
    let quat1 = Quatf::new(0.25, 0.25, 0.25, 0.25);
    let quat2 = Quatf::new(4.0, 0.0, 0.0, 0.0);
    let num5 = Complexf::new(4.0, 0.0);
    writeln!(out, "{}", quat1 * quat2)?;
    writeln!(out, "{}", quat1 * num5)?;
    writeln!(out, "{}", quat1 * 4.0)?;
    Ok(())
}

/// Builds the model-view-projection matrix for a model that swings around the Y axis.
pub fn mvp_matrix(camera: &Camera, time: f32) -> Mat4f {
    let proj = Mat4f::perspective(90.0, 800.0, 600.0, 0.1, 100.0);
    let view = camera.view();
    let model = Mat4f::rotation_y(time.sin());
    proj * view * model
}

fn mvp(camera: &Camera, time: f32, out: &mut dyn Write) -> anyhow::Result<()> {
    log::debug!(
        "camera at {} (pitch {}, yaw {}), t = {time}",
        camera.position(),
        camera.pitch(),
        camera.yaw(),
    );

    let mvp = mvp_matrix(camera, time);
    writeln!(out, "{mvp}")?;
    writeln!(out, "{:?}", mvp.as_slice())?;
    Ok(())
}

/// Prints the traced point every half second over the first five seconds.
fn cardioid(out: &mut dyn Write) -> anyhow::Result<()> {
    let cardioid = Cardioid::default();
    for frame in (0..=5 * FRAME_RATE).step_by(FRAME_RATE as usize / 2) {
        let trace = cardioid.at_frame(frame);
        writeln!(out, "frame {frame:>3}: {:.3}", trace.point)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(section: Section) -> String {
        let mut out = Vec::new();
        run(section, &Camera::default(), 0.0, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_sections() {
        for section in Section::EACH {
            assert_eq!(section.name().parse::<Section>().unwrap(), section);
        }
        assert_eq!("all".parse::<Section>().unwrap(), Section::All);

        let err = "matrices".parse::<Section>().unwrap_err();
        assert!(err.to_string().contains("unknown section `matrices`"));
    }

    #[test]
    fn vector_section() {
        assert_eq!(output(Section::Vector), "[ 0, 0, 0, 0, 0 ]\n0\n");
    }

    #[test]
    fn quat_section() {
        assert_eq!(
            output(Section::Quat),
            "1 + 1i + 1j + 1k\n1 + 1i + 1j + 1k\n1 + 1i + 1j + 1k\n"
        );
    }

    #[test]
    fn matrix_section() {
        let out = output(Section::Matrix);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4 + 4 + 4 + 3);
        assert_eq!(lines[0], "[ 1, 0, 0, 0 ]");
        assert_eq!(lines[4], "[ 0.6, 0, 0, 0 ]");
        assert_eq!(lines[12..], ["[ 20, 25, 2 ]", "[ 8, 4, 0 ]", "[ 12, 34, 4 ]"]);
    }

    #[test]
    fn complex_section() {
        let out = output(Section::Complex);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "1.3 + 0.5i");
        assert_eq!(lines[1], "5.2 + 2i");
        assert_eq!(lines[4], "3 + 5i");
    }

    #[test]
    fn mvp_section() {
        let out = output(Section::Mvp);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 5);
        assert!(lines[4].starts_with('['));

        // At t = 0 the model is unrotated, so the camera 5 units away puts the origin at depth 5.
        let mvp = mvp_matrix(&Camera::default(), 0.0);
        let clip = mvp * eng_linalg::vec4(0.0, 0.0, 0.0, 1.0);
        assert_eq!(clip.w, 5.0);
    }

    #[test]
    fn cardioid_section() {
        let out = output(Section::Cardioid);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "frame   0: 800.902 + 360.000i");
        assert!(lines[10].starts_with("frame 300: "));
    }

    #[test]
    fn mvp_follows_camera() {
        let mut camera = Camera::default();
        camera.translate(eng_linalg::vec3(0.0, 0.0, 5.0));
        let clip = mvp_matrix(&camera, 0.0) * eng_linalg::vec4(0.0, 0.0, 0.0, 1.0);
        assert_eq!(clip.w, 10.0);
    }

    #[test]
    fn all_sections() {
        let all = output(Section::All);
        let each = Section::EACH.map(output).concat();
        assert_eq!(all, each);
    }
}
