//! Command line: argument parsing, usage text and the console summary.
//!
//! Flags take exactly one value each and may come in any order. Parsing
//! stops at the first help flag or unrecognized token; missing required
//! flags are collected and reported together once all arguments are read.

use std::path::PathBuf;

use crate::alignment::{AlignmentSpec, PageSize};
use crate::errors::{ArgsError, GeometryError};
use crate::geometry::ComputedGeometry;
use crate::types::{Degrees, Mm};

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Generate(Invocation),
}

/// A complete request to draw one protractor
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub spec: AlignmentSpec,
    pub output: PathBuf,
}

impl Invocation {
    /// Compute the geometry, rejecting inputs that have no null points.
    pub fn validate(&self) -> Result<ComputedGeometry, GeometryError> {
        let computed = ComputedGeometry::compute(&self.spec);
        computed.validate(&self.spec)?;
        Ok(computed)
    }
}

/// Required flags, in the order they are reported when missing.
const REQUIRED: [&str; 6] = ["-turntable", "-tonearm", "-pts", "-oh", "-oa", "-o"];

#[derive(Default)]
struct Parsed {
    turntable: Option<String>,
    tonearm: Option<String>,
    pivot_to_spindle: Option<f64>,
    overhang: Option<f64>,
    offset_angle: Option<f64>,
    output: Option<PathBuf>,
    page_size: PageSize,
    scale_x: Option<f64>,
    scale_y: Option<f64>,
}

impl Parsed {
    fn missing(&self) -> Vec<&'static str> {
        let present = [
            self.turntable.is_some(),
            self.tonearm.is_some(),
            self.pivot_to_spindle.is_some(),
            self.overhang.is_some(),
            self.offset_angle.is_some(),
            self.output.is_some(),
        ];
        REQUIRED
            .iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(flag, _)| *flag)
            .collect()
    }
}

/// Parse the arguments that follow the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = Parsed::default();
    let mut it = args.into_iter();

    while let Some(arg) = it.next() {
        let arg = arg.as_ref();
        let mut value = |flag: &'static str| {
            it.next()
                .map(|v| v.as_ref().to_string())
                .ok_or(ArgsError::MissingValue { flag })
        };

        match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "-turntable" => parsed.turntable = Some(value("-turntable")?),
            "-tonearm" => parsed.tonearm = Some(value("-tonearm")?),
            "-pts" => parsed.pivot_to_spindle = Some(positive("-pts", &value("-pts")?)?),
            "-oh" => parsed.overhang = Some(positive("-oh", &value("-oh")?)?),
            "-oa" => parsed.offset_angle = Some(number("-oa", &value("-oa")?)?),
            "-o" => parsed.output = Some(PathBuf::from(value("-o")?)),
            "-ps" => parsed.page_size = value("-ps")?.parse()?,
            "-sx" => parsed.scale_x = Some(positive("-sx", &value("-sx")?)?),
            "-sy" => parsed.scale_y = Some(positive("-sy", &value("-sy")?)?),
            other => {
                return Err(ArgsError::UnrecognizedArgument {
                    token: other.to_string(),
                });
            }
        }
    }

    let missing = parsed.missing();
    if !missing.is_empty() {
        return Err(ArgsError::MissingParameters { names: missing });
    }

    match parsed {
        Parsed {
            turntable: Some(turntable),
            tonearm: Some(tonearm),
            pivot_to_spindle: Some(pts),
            overhang: Some(oh),
            offset_angle: Some(oa),
            output: Some(output),
            page_size,
            scale_x,
            scale_y,
        } => {
            let spec = AlignmentSpec::new(turntable, tonearm, Mm(pts), Mm(oh), Degrees(oa))
                .with_page_size(page_size)
                .with_scale(scale_x.unwrap_or(1.0), scale_y.unwrap_or(1.0));

            crate::log::debug!(
                page = %spec.page_size,
                scale_x = spec.scale_x,
                scale_y = spec.scale_y,
                "parsed arguments"
            );

            Ok(Command::Generate(Invocation { spec, output }))
        }
        _ => Err(ArgsError::MissingParameters {
            names: REQUIRED.to_vec(),
        }),
    }
}

/// A finite number.
fn number(flag: &'static str, raw: &str) -> Result<f64, ArgsError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ArgsError::InvalidNumber {
            flag,
            value: raw.to_string(),
        }),
    }
}

/// A finite number greater than zero.
fn positive(flag: &'static str, raw: &str) -> Result<f64, ArgsError> {
    let value = number(flag, raw)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ArgsError::NonPositive { flag, value })
    }
}

pub fn usage() -> String {
    let sizes = PageSize::ALL.map(PageSize::name).join(", ");
    format!(
        "Turntable alignment protractor generator.

Usage: protractor -turntable NAME -tonearm NAME -pts LENGTH -oh LENGTH -oa ANGLE -o FILENAME [options]

Supported args:
  -turntable NAME - turntable name
  -tonearm NAME   - tonearm name
  -pts LENGTH     - pivot to spindle length (in mm)
  -oh LENGTH      - stylus overhang (in mm)
  -oa ANGLE       - stylus offset angle (in °)
  -o FILENAME     - output filename (PDF, or SVG when it ends in .svg)
  -ps PAGESIZE    - page size to use, default A4
                    ({sizes})
  -sx SCALE       - scaling factor for x-axis, default 1.0
  -sy SCALE       - scaling factor for y-axis, default 1.0
  -h, --help      - print this help"
    )
}

/// Inputs and derived lengths, echoed before the document is written.
pub fn summary(spec: &AlignmentSpec, computed: &ComputedGeometry) -> String {
    format!(
        "inputs:
pivot to spindle : {}
stylus overhang  : {}
offset angle     : {}

computed:
effective length : {}
inner null       : {:.3}
outer null       : {:.3}",
        spec.pivot_to_spindle,
        spec.overhang,
        spec.offset_angle,
        computed.effective_length,
        computed.nulls.inner,
        computed.nulls.outer,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOFGREN_A: [&str; 12] = [
        "-turntable", "Rega Planar 3", "-tonearm", "RB300", "-pts", "222", "-oh", "17.3", "-oa",
        "22.99", "-o", "out.pdf",
    ];

    fn generate(args: &[&str]) -> Invocation {
        match parse_args(args) {
            Ok(Command::Generate(invocation)) => invocation,
            other => panic!("expected an invocation, got {other:?}"),
        }
    }

    #[test]
    fn parses_a_full_invocation_with_defaults() {
        let invocation = generate(&LOFGREN_A);
        assert_eq!(invocation.output, PathBuf::from("out.pdf"));
        assert_eq!(invocation.spec.turntable, "Rega Planar 3");
        assert_eq!(invocation.spec.tonearm, "RB300");
        assert_eq!(invocation.spec.pivot_to_spindle, Mm(222.0));
        assert_eq!(invocation.spec.overhang, Mm(17.3));
        assert_eq!(invocation.spec.offset_angle, Degrees(22.99));
        assert_eq!(invocation.spec.page_size, PageSize::A4);
        assert_eq!((invocation.spec.scale_x, invocation.spec.scale_y), (1.0, 1.0));
    }

    #[test]
    fn optional_flags_in_any_order() {
        let mut args = vec!["-sy", "0.98", "-ps", "a3", "-sx", "1.01"];
        args.extend(LOFGREN_A);
        let invocation = generate(&args);
        assert_eq!(invocation.spec.page_size, PageSize::A3);
        assert_eq!(invocation.spec.scale_x, 1.01);
        assert_eq!(invocation.spec.scale_y, 0.98);
    }

    #[test]
    fn help_wins_over_everything_else() {
        assert_eq!(parse_args(["-h"]), Ok(Command::Help));
        assert_eq!(parse_args(["-pts", "222", "--help", "-bogus"]), Ok(Command::Help));
    }

    #[test]
    fn all_missing_parameters_are_reported_at_once() {
        let err = parse_args(["-turntable", "x", "-oh", "15"]).unwrap_err();
        assert_eq!(
            err,
            ArgsError::MissingParameters {
                names: vec!["-tonearm", "-pts", "-oa", "-o"]
            }
        );

        let err = parse_args(&LOFGREN_A[..10]).unwrap_err();
        assert_eq!(err.to_string(), "missing required parameter(s): -o");

        let none: [&str; 0] = [];
        let err = parse_args(none).unwrap_err();
        assert_eq!(err, ArgsError::MissingParameters { names: REQUIRED.to_vec() });
    }

    #[test]
    fn unrecognized_argument_is_reported_immediately() {
        let err = parse_args(["-turntable", "x", "-frobnicate", "1"]).unwrap_err();
        assert_eq!(
            err,
            ArgsError::UnrecognizedArgument {
                token: "-frobnicate".into()
            }
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            parse_args(["-pts", "long"]).unwrap_err(),
            ArgsError::InvalidNumber { flag: "-pts", value: "long".into() }
        );
        assert_eq!(
            parse_args(["-oa", "NaN"]).unwrap_err(),
            ArgsError::InvalidNumber { flag: "-oa", value: "NaN".into() }
        );
        assert_eq!(
            parse_args(["-oh", "-3"]).unwrap_err(),
            ArgsError::NonPositive { flag: "-oh", value: -3.0 }
        );
        assert_eq!(
            parse_args(["-sx", "0"]).unwrap_err(),
            ArgsError::NonPositive { flag: "-sx", value: 0.0 }
        );
        assert_eq!(
            parse_args(["-ps", "A7"]).unwrap_err(),
            ArgsError::UnknownPageSize { value: "A7".into() }
        );
        assert_eq!(
            parse_args(["-turntable", "x", "-o"]).unwrap_err(),
            ArgsError::MissingValue { flag: "-o" }
        );
    }

    #[test]
    fn negative_offset_angle_is_allowed() {
        let mut args = LOFGREN_A.to_vec();
        args[9] = "-5";
        assert_eq!(generate(&args).spec.offset_angle, Degrees(-5.0));
    }

    #[test]
    fn validation_rejects_geometry_without_nulls() {
        let mut args = LOFGREN_A.to_vec();
        args[7] = "500";
        args[9] = "80";
        let err = generate(&args).validate().unwrap_err();
        assert!(matches!(err, GeometryError::Infeasible { .. }));

        let computed = generate(&LOFGREN_A).validate().unwrap();
        assert!((computed.nulls.inner.0 - 65.987).abs() < 1e-3);
    }

    #[test]
    fn usage_text() {
        insta::assert_snapshot!(usage(), @r"
        Turntable alignment protractor generator.

        Usage: protractor -turntable NAME -tonearm NAME -pts LENGTH -oh LENGTH -oa ANGLE -o FILENAME [options]

        Supported args:
          -turntable NAME - turntable name
          -tonearm NAME   - tonearm name
          -pts LENGTH     - pivot to spindle length (in mm)
          -oh LENGTH      - stylus overhang (in mm)
          -oa ANGLE       - stylus offset angle (in °)
          -o FILENAME     - output filename (PDF, or SVG when it ends in .svg)
          -ps PAGESIZE    - page size to use, default A4
                            (A0, A1, A2, A3, A4, A5, B4, B5, LETTER, LEGAL, TABLOID, EXECUTIVE, FOLIO)
          -sx SCALE       - scaling factor for x-axis, default 1.0
          -sy SCALE       - scaling factor for y-axis, default 1.0
          -h, --help      - print this help
        ");
    }

    #[test]
    fn summary_text() {
        let invocation = generate(&LOFGREN_A);
        let computed = invocation.validate().unwrap();
        insta::assert_snapshot!(summary(&invocation.spec, &computed), @r"
        inputs:
        pivot to spindle : 222 mm
        stylus overhang  : 17.3 mm
        offset angle     : 22.99°

        computed:
        effective length : 239.3 mm
        inner null       : 65.987 mm
        outer null       : 120.940 mm
        ");
    }
}
