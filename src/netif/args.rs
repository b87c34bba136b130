//! Constructor arguments and their validation.
//!
//! `make_new` receives loosely typed arguments from the surrounding runtime:
//! at most one positional interface selector and a set of keywords.
//!
//! | Keyword | Value | Requires |
//! |---------|-------|----------|
//! | `interface` | `0` station, `1` access point | |
//! | `pin_on`, `pin_out`, `pin_in`, `pin_wake`, `pin_clock`, `pin_cs` | pin | dynamic pins |
//! | `pin_dat` | pin, fills `pin_out`, `pin_in` and `pin_wake` | dynamic pins |
//! | `div_int`, `div_frac` | non-negative integer, `div_int = 0` keeps the clock | dynamic clock |
//!
//! A pin is a GPIO number, a `GP<n>` / `GPIO<n>` name or a board alias such
//! as `WL_CS`. A value of [`ArgValue::None`] counts as not given.

use super::{Capabilities, NetifError, Role};
use crate::board::BoardConfig;
use crate::radio::{ClockDivisor, PinOverrides, PinRole};
use std::fmt;

const SHARED_DATA_OPTION: &str = "pin_dat";
const DIV_INT_OPTION: &str = "div_int";
const DIV_FRAC_OPTION: &str = "div_frac";
const INTERFACE_OPTION: &str = "interface";

/// One loosely typed constructor argument.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ArgValue {
    Int(i64),
    Str(String),
    #[default]
    None,
}

impl ArgValue {
    /// Interpret command-line text: `None`, an integer, or a (possibly
    /// quoted) string.
    pub fn parse_literal(text: &str) -> Self {
        let text = text.trim();
        if text == "None" {
            return Self::None;
        }
        if let Ok(value) = text.parse::<i64>() {
            return Self::Int(value);
        }
        let unquoted = text
            .strip_prefix('"')
            .and_then(|t| t.strip_suffix('"'))
            .or_else(|| text.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')))
            .unwrap_or(text);
        Self::Str(unquoted.to_string())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    fn supplied(&self) -> Option<&Self> {
        (!self.is_none()).then_some(self)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Str(s) => write!(f, "'{}'", s),
            Self::None => write!(f, "None"),
        }
    }
}

/// Validated, fully resolved form of one interface request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterfaceRequest {
    pub role: Role,
    pub pins: PinOverrides,
    /// Clock divisor to program; `None` leaves the bus clock alone.
    pub clock: Option<ClockDivisor>,
}

impl InterfaceRequest {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    pub fn with_pin(mut self, role: PinRole, gpio: u8) -> Self {
        self.pins.set(role, gpio);
        self
    }

    pub fn with_shared_data(mut self, gpio: u8) -> Self {
        self.pins.set_shared_data(gpio);
        self
    }

    pub fn with_clock(mut self, divisor: ClockDivisor) -> Self {
        self.clock = Some(divisor);
        self
    }

    /// Clock divisor that will actually be programmed. A zero integer part
    /// means "no change".
    pub fn effective_clock(&self) -> Option<ClockDivisor> {
        self.clock.filter(|divisor| divisor.integer > 0)
    }

    /// Check a programmatically built request against the board.
    pub fn validate(&self, board: &BoardConfig, caps: &Capabilities) -> Result<(), NetifError> {
        for (option, gpio) in self.pins.supplied() {
            if !caps.dynamic_pins {
                return Err(NetifError::UnsupportedOverride { option });
            }
            if !board.has_gpio(gpio) {
                return Err(NetifError::InvalidPin {
                    option,
                    reason: format!("GPIO{} does not exist on {}", gpio, board.name),
                });
            }
        }
        if self.clock.is_some() && !caps.dynamic_clock {
            return Err(NetifError::UnsupportedOverride {
                option: DIV_INT_OPTION,
            });
        }
        Ok(())
    }

    /// Parse constructor arguments.
    ///
    /// The whole argument list is checked before anything is returned, so a
    /// caller holding an `Ok` request can apply it without further failure.
    pub fn parse(
        positional: &[ArgValue],
        keywords: &[(&str, ArgValue)],
        board: &BoardConfig,
        caps: &Capabilities,
    ) -> Result<Self, NetifError> {
        if positional.len() > 1 {
            return Err(NetifError::TooManyArguments);
        }

        let mut interface = positional.first().and_then(ArgValue::supplied);
        let mut pins: [Option<&ArgValue>; 6] = [None; 6];
        let mut shared_data = None;
        let mut div_int = None;
        let mut div_frac = None;

        for (name, value) in keywords {
            let value = value.supplied();
            match *name {
                INTERFACE_OPTION => {
                    if interface.is_some() && value.is_some() {
                        return Err(NetifError::TooManyArguments);
                    }
                    interface = interface.or(value);
                }
                SHARED_DATA_OPTION => shared_data = value,
                DIV_INT_OPTION => div_int = value,
                DIV_FRAC_OPTION => div_frac = value,
                other => match PinRole::ALL.iter().find(|role| role.option_name() == other) {
                    Some(role) => pins[role.index()] = value,
                    None => return Err(NetifError::UnknownArgument(other.to_string())),
                },
            }
        }

        let role = match interface {
            None => Role::Station,
            Some(ArgValue::Int(raw)) => Role::from_raw(*raw)?,
            Some(_) => {
                return Err(NetifError::InvalidArgumentType {
                    option: INTERFACE_OPTION,
                    expected: "an integer",
                })
            }
        };

        let mut request = Self::new(role);
        for role in PinRole::ALL {
            if let Some(value) = pins[role.index()] {
                let gpio = resolve_pin(role.option_name(), value, board, caps)?;
                request.pins.set(role, gpio);
            }
        }
        if let Some(value) = shared_data {
            let gpio = resolve_pin(SHARED_DATA_OPTION, value, board, caps)?;
            request.pins.set_shared_data(gpio);
        }

        let integer = divisor_part(DIV_INT_OPTION, div_int, u16::MAX as i64, caps)?;
        let fraction = divisor_part(DIV_FRAC_OPTION, div_frac, u8::MAX as i64, caps)?;
        if integer > 0 {
            request.clock = Some(ClockDivisor::new(integer as u16, fraction as u8));
        }

        Ok(request)
    }
}

fn resolve_pin(
    option: &'static str,
    value: &ArgValue,
    board: &BoardConfig,
    caps: &Capabilities,
) -> Result<u8, NetifError> {
    if !caps.dynamic_pins {
        return Err(NetifError::UnsupportedOverride { option });
    }

    let gpio = match value {
        ArgValue::Int(n) => u8::try_from(*n).ok().filter(|g| board.has_gpio(*g)),
        ArgValue::Str(name) => board.alias(name).or_else(|| {
            strip_prefix_ignore_case(name, "GPIO")
                .or_else(|| strip_prefix_ignore_case(name, "GP"))
                .and_then(|digits| digits.parse::<u8>().ok())
                .filter(|g| board.has_gpio(*g))
        }),
        ArgValue::None => None,
    };

    gpio.ok_or_else(|| NetifError::InvalidPin {
        option,
        reason: format!("{} is not a pin on {}", value, board.name),
    })
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        text.get(prefix.len()..)
    } else {
        None
    }
}

fn divisor_part(
    option: &'static str,
    value: Option<&ArgValue>,
    max: i64,
    caps: &Capabilities,
) -> Result<i64, NetifError> {
    let Some(value) = value else {
        return Ok(0);
    };
    if !caps.dynamic_clock {
        return Err(NetifError::UnsupportedOverride { option });
    }
    match value {
        ArgValue::Int(n) if (0..=max).contains(n) => Ok(*n),
        ArgValue::Int(n) => Err(NetifError::InvalidClockDivisor { option, value: *n }),
        _ => Err(NetifError::InvalidArgumentType {
            option,
            expected: "an integer",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PICO_W, SPARKFUN_IOT_REDBOARD_ESP32};

    fn parse(
        positional: &[ArgValue],
        keywords: &[(&str, ArgValue)],
    ) -> Result<InterfaceRequest, NetifError> {
        InterfaceRequest::parse(positional, keywords, &PICO_W, &Capabilities::all())
    }

    // ==================== Literal Tests ====================

    #[test]
    fn test_parse_literal() {
        assert_eq!(ArgValue::parse_literal("None"), ArgValue::None);
        assert_eq!(ArgValue::parse_literal("-3"), ArgValue::Int(-3));
        assert_eq!(ArgValue::parse_literal("GP4"), ArgValue::Str("GP4".into()));
        assert_eq!(ArgValue::parse_literal("'WL_CS'"), ArgValue::Str("WL_CS".into()));
        assert_eq!(ArgValue::parse_literal("\"x\""), ArgValue::Str("x".into()));
    }

    // ==================== Role Tests ====================

    #[test]
    fn test_no_arguments_is_station() {
        let request = parse(&[], &[]).unwrap();
        assert_eq!(request, InterfaceRequest::new(Role::Station));
    }

    #[test]
    fn test_positional_and_keyword_role() {
        assert_eq!(parse(&[ArgValue::Int(1)], &[]).unwrap().role, Role::AccessPoint);
        assert_eq!(
            parse(&[], &[("interface", ArgValue::Int(1))]).unwrap().role,
            Role::AccessPoint
        );
        assert_eq!(parse(&[ArgValue::None], &[]).unwrap().role, Role::Station);
    }

    #[test]
    fn test_invalid_role() {
        assert_eq!(parse(&[ArgValue::Int(2)], &[]), Err(NetifError::InvalidRole(2)));
        assert_eq!(
            parse(&["ap".into()], &[]),
            Err(NetifError::InvalidArgumentType {
                option: "interface",
                expected: "an integer"
            })
        );
    }

    #[test]
    fn test_too_many_arguments() {
        assert_eq!(
            parse(&[ArgValue::Int(0), ArgValue::Int(1)], &[]),
            Err(NetifError::TooManyArguments)
        );
        assert_eq!(
            parse(&[ArgValue::Int(0)], &[("interface", ArgValue::Int(1))]),
            Err(NetifError::TooManyArguments)
        );
    }

    #[test]
    fn test_unknown_keyword() {
        assert_eq!(
            parse(&[], &[("pin_foo", ArgValue::Int(1))]),
            Err(NetifError::UnknownArgument("pin_foo".into()))
        );
    }

    // ==================== Pin Tests ====================

    #[test]
    fn test_pin_forms() {
        let request = parse(
            &[],
            &[
                ("pin_on", ArgValue::Int(2)),
                ("pin_cs", "GP5".into()),
                ("pin_clock", "gpio6".into()),
                ("pin_dat", "WL_D".into()),
            ],
        )
        .unwrap();
        assert_eq!(request.pins.get(PinRole::PowerOn), Some(2));
        assert_eq!(request.pins.get(PinRole::ChipSelect), Some(5));
        assert_eq!(request.pins.get(PinRole::Clock), Some(6));
        assert_eq!(request.pins.shared_data(), Some(24));
    }

    #[test]
    fn test_none_pin_is_not_supplied() {
        let request = parse(&[], &[("pin_cs", ArgValue::None)]).unwrap();
        assert!(request.pins.is_empty());
    }

    #[test]
    fn test_invalid_pins() {
        for value in [ArgValue::Int(30), ArgValue::Int(-1), "GP99".into(), "LED".into()] {
            assert!(matches!(
                parse(&[], &[("pin_in", value)]),
                Err(NetifError::InvalidPin {
                    option: "pin_in",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_pin_override_unsupported() {
        let caps = Capabilities {
            dynamic_pins: false,
            dynamic_clock: true,
        };
        assert_eq!(
            InterfaceRequest::parse(&[], &[("pin_dat", ArgValue::Int(4))], &PICO_W, &caps),
            Err(NetifError::UnsupportedOverride { option: "pin_dat" })
        );
    }

    // ==================== Divisor Tests ====================

    #[test]
    fn test_divisor_parsed() {
        let request = parse(&[], &[("div_int", ArgValue::Int(3)), ("div_frac", ArgValue::Int(128))]).unwrap();
        assert_eq!(request.clock, Some(ClockDivisor::new(3, 128)));
    }

    #[test]
    fn test_zero_divisor_means_no_change() {
        let request = parse(&[], &[("div_int", ArgValue::Int(0)), ("div_frac", ArgValue::Int(64))]).unwrap();
        assert_eq!(request.clock, None);
    }

    #[test]
    fn test_divisor_bounds() {
        assert_eq!(
            parse(&[], &[("div_int", ArgValue::Int(-1))]),
            Err(NetifError::InvalidClockDivisor {
                option: "div_int",
                value: -1
            })
        );
        assert_eq!(
            parse(&[], &[("div_frac", ArgValue::Int(256))]),
            Err(NetifError::InvalidClockDivisor {
                option: "div_frac",
                value: 256
            })
        );
        assert!(parse(&[], &[("div_int", ArgValue::Int(65535))]).is_ok());
        assert!(matches!(
            parse(&[], &[("div_int", ArgValue::Int(65536))]),
            Err(NetifError::InvalidClockDivisor { .. })
        ));
    }

    #[test]
    fn test_divisor_type() {
        assert_eq!(
            parse(&[], &[("div_int", "fast".into())]),
            Err(NetifError::InvalidArgumentType {
                option: "div_int",
                expected: "an integer"
            })
        );
    }

    #[test]
    fn test_divisor_unsupported() {
        let caps = Capabilities {
            dynamic_pins: true,
            dynamic_clock: false,
        };
        assert_eq!(
            InterfaceRequest::parse(&[], &[("div_frac", ArgValue::Int(1))], &PICO_W, &caps),
            Err(NetifError::UnsupportedOverride { option: "div_frac" })
        );
    }

    // ==================== Validate Tests ====================

    #[test]
    fn test_validate_programmatic_request() {
        let caps = Capabilities::all();
        let ok = InterfaceRequest::new(Role::AccessPoint).with_pin(PinRole::ChipSelect, 5);
        assert!(ok.validate(&PICO_W, &caps).is_ok());

        let bad = InterfaceRequest::new(Role::Station).with_shared_data(40);
        assert!(matches!(
            bad.validate(&PICO_W, &caps),
            Err(NetifError::InvalidPin {
                option: "pin_dat",
                ..
            })
        ));

        let clock = InterfaceRequest::new(Role::Station).with_clock(ClockDivisor::new(4, 0));
        assert_eq!(
            clock.validate(&SPARKFUN_IOT_REDBOARD_ESP32, &Capabilities::none()),
            Err(NetifError::UnsupportedOverride { option: "div_int" })
        );
    }

    #[test]
    fn test_effective_clock() {
        let request = InterfaceRequest::new(Role::Station).with_clock(ClockDivisor::new(0, 9));
        assert_eq!(request.effective_clock(), None);
        let request = request.with_clock(ClockDivisor::new(1, 9));
        assert_eq!(request.effective_clock(), Some(ClockDivisor::new(1, 9)));
    }
}
