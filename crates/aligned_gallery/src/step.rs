use std::str::FromStr;

use aligned_button::{AlignError, AlignedButton, Alignment, MarginOverride};
use glam::Vec2;
use thiserror::Error;

/// Failure to turn a step string into a [`Step`].
#[derive(Debug, Error, PartialEq)]
pub enum StepError {
    #[error("malformed step `{0}`, expected `name(arg, ...)`")]
    Syntax(String),
    #[error("unknown call `{0}`")]
    UnknownCall(String),
    #[error("`{call}` takes {expected} argument(s), got {got}")]
    Arity {
        call: String,
        expected: &'static str,
        got: usize,
    },
    #[error("`{call}`: `{value}` is not a number")]
    BadNumber { call: String, value: String },
    #[error(transparent)]
    Align(#[from] AlignError),
}

/// One call made on a button while setting up a scenario.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    AlignTextLeft(Option<f32>),
    AlignTextRight(Option<f32>),
    AlignTextCenter,
    AlignIconLeft,
    AlignIconRight,
    PinIconLeft(Option<f32>),
    PinIconRight(Option<f32>),
    UnpinIcon,
    SetTextAlignment(Alignment, Option<Alignment>),
    SetContentMargins(MarginOverride),
    SetIconSize(Vec2),
}

impl Step {
    pub fn apply(&self, button: &mut AlignedButton) -> Result<(), AlignError> {
        match self {
            Step::AlignTextLeft(m) => button.align_text_left(*m),
            Step::AlignTextRight(m) => button.align_text_right(*m),
            Step::AlignTextCenter => button.align_text_center(),
            Step::AlignIconLeft => button.align_icon_left(),
            Step::AlignIconRight => button.align_icon_right(),
            Step::PinIconLeft(m) => button.pin_icon_left(*m),
            Step::PinIconRight(m) => button.pin_icon_right(*m),
            Step::UnpinIcon => button.unpin_icon(),
            Step::SetTextAlignment(h, v) => button.set_text_alignment(*h, *v)?,
            Step::SetContentMargins(patch) => button.apply_margins(patch),
            Step::SetIconSize(size) => button.set_icon_size(*size),
        }
        Ok(())
    }
}

/// Split `name(a, b)` into the name and its trimmed arguments. Empty
/// arguments and `none` stand for an absent value.
fn split_call(s: &str) -> Result<(&str, Vec<Option<&str>>), StepError> {
    let s = s.trim();
    let (name, rest) = s
        .split_once('(')
        .ok_or_else(|| StepError::Syntax(s.to_string()))?;
    let inner = rest
        .strip_suffix(')')
        .ok_or_else(|| StepError::Syntax(s.to_string()))?;

    let args = if inner.trim().is_empty() {
        Vec::new()
    } else {
        inner
            .split(',')
            .map(str::trim)
            .map(|a| (!a.is_empty() && !a.eq_ignore_ascii_case("none")).then_some(a))
            .collect()
    };
    Ok((name.trim(), args))
}

fn number(call: &str, value: Option<&str>) -> Result<Option<f32>, StepError> {
    value
        .map(|v| {
            v.parse::<f32>().map_err(|_| StepError::BadNumber {
                call: call.to_string(),
                value: v.to_string(),
            })
        })
        .transpose()
}

fn arity(call: &str, args: &[Option<&str>], max: usize, expected: &'static str) -> Result<(), StepError> {
    if args.len() > max {
        return Err(StepError::Arity {
            call: call.to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

impl FromStr for Step {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (call, args) = split_call(s)?;
        let arg = |i: usize| args.get(i).copied().flatten();

        let step = match call {
            "align_text_left" | "align_text_right" | "pin_icon_left" | "pin_icon_right" => {
                arity(call, &args, 1, "0 or 1")?;
                let margin = number(call, arg(0))?;
                match call {
                    "align_text_left" => Step::AlignTextLeft(margin),
                    "align_text_right" => Step::AlignTextRight(margin),
                    "pin_icon_left" => Step::PinIconLeft(margin),
                    _ => Step::PinIconRight(margin),
                }
            }
            "align_text_center" | "align_icon_left" | "align_icon_right" | "unpin_icon" => {
                arity(call, &args, 0, "no")?;
                match call {
                    "align_text_center" => Step::AlignTextCenter,
                    "align_icon_left" => Step::AlignIconLeft,
                    "align_icon_right" => Step::AlignIconRight,
                    _ => Step::UnpinIcon,
                }
            }
            "set_text_alignment" => {
                arity(call, &args, 2, "1 or 2")?;
                let h = arg(0).ok_or_else(|| StepError::Arity {
                    call: call.to_string(),
                    expected: "1 or 2",
                    got: 0,
                })?;
                let v = arg(1).map(str::parse::<Alignment>).transpose()?;
                Step::SetTextAlignment(h.parse()?, v)
            }
            "set_content_margins" => {
                arity(call, &args, 4, "up to 4")?;
                Step::SetContentMargins(MarginOverride {
                    left: number(call, arg(0))?,
                    top: number(call, arg(1))?,
                    right: number(call, arg(2))?,
                    bottom: number(call, arg(3))?,
                })
            }
            "set_icon_size" => {
                let (w, h) = match (number(call, arg(0))?, number(call, arg(1))?) {
                    (Some(w), Some(h)) if args.len() == 2 => (w, h),
                    _ => {
                        return Err(StepError::Arity {
                            call: call.to_string(),
                            expected: "2",
                            got: args.len(),
                        })
                    }
                };
                Step::SetIconSize(Vec2::new(w, h))
            }
            other => return Err(StepError::UnknownCall(other.to_string())),
        };
        Ok(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_margins_and_empty_calls() {
        assert_eq!("pin_icon_left(15)".parse(), Ok(Step::PinIconLeft(Some(15.0))));
        assert_eq!("pin_icon_left()".parse(), Ok(Step::PinIconLeft(None)));
        assert_eq!(" unpin_icon( ) ".parse(), Ok(Step::UnpinIcon));
        assert_eq!(
            "set_content_margins(1, none, , 4)".parse(),
            Ok(Step::SetContentMargins(MarginOverride {
                left: Some(1.0),
                top: None,
                right: None,
                bottom: Some(4.0),
            }))
        );
    }

    #[test]
    fn parses_text_alignment() {
        assert_eq!(
            "set_text_alignment(end, center)".parse(),
            Ok(Step::SetTextAlignment(Alignment::End, Some(Alignment::Center)))
        );
        assert_eq!(
            "set_text_alignment(left)".parse(),
            Ok(Step::SetTextAlignment(Alignment::Start, None))
        );
    }

    #[test]
    fn rejects_bad_steps() {
        assert!(matches!("pin_icon_left".parse::<Step>(), Err(StepError::Syntax(_))));
        assert!(matches!("explode()".parse::<Step>(), Err(StepError::UnknownCall(_))));
        assert!(matches!("unpin_icon(3)".parse::<Step>(), Err(StepError::Arity { .. })));
        assert!(matches!("align_text_left(wide)".parse::<Step>(), Err(StepError::BadNumber { .. })));
        assert!(matches!("set_text_alignment(diagonal)".parse::<Step>(), Err(StepError::Align(_))));
        assert!(matches!("set_icon_size(8)".parse::<Step>(), Err(StepError::Arity { .. })));
    }

    #[test]
    fn stretch_parses_but_fails_on_apply() {
        let step: Step = "set_text_alignment(stretch)".parse().unwrap();
        let mut button = AlignedButton::new(aligned_button::Icon::arrow_right(), "x");
        let before = button.layout_order();
        assert!(step.apply(&mut button).is_err());
        assert_eq!(button.layout_order(), before);
    }
}
