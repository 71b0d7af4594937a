// wave-runup/src/models/kind.rs

use crate::errors::RunupError;
use crate::wave::Param;
use std::fmt;
use std::str::FromStr;

/// Runup-related quantities a model may define.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Output {
    /// 2% exceedance runup
    R2,
    Setup,
    /// Incident band swash
    Sinc,
    /// Infragravity band swash
    Sig,
    /// Total swash
    Swash,
}

impl Output {
    pub const ALL: [Output; 5] = [
        Output::R2,
        Output::Setup,
        Output::Sinc,
        Output::Sig,
        Output::Swash,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::R2 => "R2",
            Self::Setup => "setup",
            Self::Sinc => "sinc",
            Self::Sig => "sig",
            Self::Swash => "swash",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Output {
    type Err = RunupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Output::ALL
            .into_iter()
            .find(|output| output.name() == s)
            .ok_or_else(|| RunupError::UnknownOutput(s.to_string()))
    }
}

/// The closed set of published runup models.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModelKind {
    Stockdon2006,
    Power2018,
    Holman1986,
    Nielsen2009,
    Ruggiero2001,
    Vousdoukas2012,
    Atkinson2017,
    Senechal2011,
    Beuzen2019,
    Passarella2018,
}

impl ModelKind {
    pub const ALL: [ModelKind; 10] = [
        ModelKind::Stockdon2006,
        ModelKind::Power2018,
        ModelKind::Holman1986,
        ModelKind::Nielsen2009,
        ModelKind::Ruggiero2001,
        ModelKind::Vousdoukas2012,
        ModelKind::Atkinson2017,
        ModelKind::Senechal2011,
        ModelKind::Beuzen2019,
        ModelKind::Passarella2018,
    ];

    /// Every model given by an explicit equation, i.e. all but the GP model.
    pub const CLOSED_FORM: [ModelKind; 9] = [
        ModelKind::Stockdon2006,
        ModelKind::Power2018,
        ModelKind::Holman1986,
        ModelKind::Nielsen2009,
        ModelKind::Ruggiero2001,
        ModelKind::Vousdoukas2012,
        ModelKind::Atkinson2017,
        ModelKind::Senechal2011,
        ModelKind::Passarella2018,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stockdon2006 => "Stockdon2006",
            Self::Power2018 => "Power2018",
            Self::Holman1986 => "Holman1986",
            Self::Nielsen2009 => "Nielsen2009",
            Self::Ruggiero2001 => "Ruggiero2001",
            Self::Vousdoukas2012 => "Vousdoukas2012",
            Self::Atkinson2017 => "Atkinson2017",
            Self::Senechal2011 => "Senechal2011",
            Self::Beuzen2019 => "Beuzen2019",
            Self::Passarella2018 => "Passarella2018",
        }
    }

    pub fn doi(&self) -> Option<&'static str> {
        match self {
            Self::Stockdon2006 => Some("10.1016/j.coastaleng.2005.12.005"),
            Self::Power2018 => Some("10.1016/j.coastaleng.2018.10.006"),
            Self::Holman1986 => Some("10.1016/0378-3839(86)90002-5"),
            Self::Nielsen2009 | Self::Ruggiero2001 => None,
            Self::Vousdoukas2012 => Some("10.1007/s10236-011-0480-x"),
            Self::Atkinson2017 => Some("10.1016/j.coastaleng.2016.10.001"),
            Self::Senechal2011 => Some("10.1029/2010JC006819"),
            Self::Beuzen2019 => Some("10.5194/nhess-19-2295-2019"),
            Self::Passarella2018 => Some("10.5194/nhess-18-599-2018"),
        }
    }

    pub fn citation(&self) -> &'static str {
        match self {
            Self::Stockdon2006 => {
                "Stockdon, H. F., Holman, R. A., Howd, P. A., & Sallenger, A. H. (2006). \
                 Empirical parameterization of setup, swash, and runup. Coastal Engineering, 53(7), 573-588."
            }
            Self::Power2018 => {
                "Power, H.E., Gharabaghi, B., Bonakdari, H., Robertson, B., Atkinson, A.L., Baldock, T.E., 2018. \
                 Prediction of wave runup on beaches using Gene-Expression Programming and empirical relationships. \
                 Coastal Engineering."
            }
            Self::Holman1986 => {
                "Holman, R.A., 1986. Extreme value statistics for wave run-up on a natural beach. \
                 Coastal Engineering 9, 527-544."
            }
            Self::Nielsen2009 => {
                "P. Nielsen, Coastal and Estuarine Processes, Singapore, World Scientific, 2009."
            }
            Self::Ruggiero2001 => {
                "Ruggiero, P., Komar, P.D., McDougal, W.G., Marra, J.J., Beach, R.A., 2001. Wave Runup, \
                 Extreme Water Levels and the Erosion of Properties Backing Beaches. \
                 Journal of Coastal Research 17, 407-419."
            }
            Self::Vousdoukas2012 => {
                "Vousdoukas, M.I., Wziatek, D., Almeida, L.P., 2012. Coastal vulnerability assessment based on \
                 video wave run-up observations at a mesotidal, steep-sloped beach. Ocean Dynamics 62, 123-137."
            }
            Self::Atkinson2017 => {
                "Atkinson, A.L., Power, H.E., Moura, T., Hammond, T., Callaghan, D.P., Baldock, T.E., 2017. \
                 Assessment of runup predictions by empirical models on non-truncated beaches on the south-east \
                 Australian coast. Coastal Engineering 119, 15-31."
            }
            Self::Senechal2011 => {
                "Senechal, N., Coco, G., Bryan, K.R., Holman, R.A., 2011. Wave runup during extreme storm \
                 conditions. Journal of Geophysical Research 116."
            }
            Self::Beuzen2019 => {
                "Beuzen, T., Goldstein, E. B., & Splinter, K. D., 2019. Ensemble models from machine learning: \
                 an example of wave runup and coastal dune erosion. Nat. Hazards Earth Syst. Sci. 19."
            }
            Self::Passarella2018 => {
                "Passarella, M., E. B. Goldstein, S. De Muro, G. Coco, 2018. The use of genetic programming to \
                 develop a predictor of swash excursion on sandy beaches. Nat. Hazards Earth Syst. Sci., 18, 599-611."
            }
        }
    }

    /// Outputs the model defines. Anything else is an [`UndefinedOutputError`].
    ///
    /// [`UndefinedOutputError`]: crate::errors::UndefinedOutputError
    pub fn outputs(&self) -> &'static [Output] {
        match self {
            Self::Stockdon2006 => &Output::ALL,
            Self::Holman1986 => &[Output::R2, Output::Setup],
            Self::Senechal2011 => &[Output::R2, Output::Sig],
            Self::Passarella2018 => &[Output::Sig, Output::Swash],
            Self::Power2018
            | Self::Nielsen2009
            | Self::Ruggiero2001
            | Self::Vousdoukas2012
            | Self::Atkinson2017
            | Self::Beuzen2019 => &[Output::R2],
        }
    }

    pub fn defines(&self, output: Output) -> bool {
        self.outputs().contains(&output)
    }

    /// Inputs the model needs beyond Hs, beta and one of Tp or Lp.
    pub fn required_inputs(&self) -> &'static [Param] {
        match self {
            Self::Power2018 => &[Param::R],
            _ => &[],
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_from_str() {
        assert_eq!("R2".parse::<Output>().unwrap(), Output::R2);
        assert_eq!("swash".parse::<Output>().unwrap(), Output::Swash);
        assert!(matches!(
            "not_r2".parse::<Output>(),
            Err(RunupError::UnknownOutput(name)) if name == "not_r2"
        ));
    }

    #[test]
    fn test_output_indices_are_dense() {
        for (i, output) in Output::ALL.iter().enumerate() {
            assert_eq!(output.index(), i);
        }
    }

    #[test]
    fn test_capabilities() {
        assert!(ModelKind::Stockdon2006.defines(Output::Sinc));
        assert!(!ModelKind::Holman1986.defines(Output::Swash));
        assert!(!ModelKind::Passarella2018.defines(Output::R2));
        assert_eq!(ModelKind::Power2018.required_inputs(), &[Param::R]);
        assert!(!ModelKind::CLOSED_FORM.contains(&ModelKind::Beuzen2019));
        assert_eq!(ModelKind::ALL.len(), ModelKind::CLOSED_FORM.len() + 1);
    }
}
