//! Well input validation.

use crate::schema::{InclinometryDef, PvtDef, WellDef};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Inclinometry MD and TVD lengths differ ({md} vs {tvd})")]
    LengthMismatch { md: usize, tvd: usize },

    #[error("Inclinometry needs at least two stations, got {count}")]
    TooFewStations { count: usize },

    #[error("Inclinometry MD must be strictly increasing (index {index})")]
    NonIncreasingMd { index: usize },

    #[error("Inconsistent well geometry: {what}")]
    Geometry { what: String },
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn require_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive"))
    }
}

fn require_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite"))
    }
}

pub fn validate_well(well: &WellDef) -> Result<(), ValidationError> {
    validate_inclinometry(&well.inclinometry)?;
    validate_pvt(&well.pvt)?;

    require_positive("casing.d", well.casing.d)?;
    require_positive("tubing.d", well.tubing.d)?;
    if well.tubing.d > well.casing.d {
        return Err(ValidationError::Geometry {
            what: format!(
                "tubing diameter {} m exceeds casing diameter {} m",
                well.tubing.d, well.casing.d
            ),
        });
    }

    require_finite("tubing.h_mes", well.tubing.h_mes)?;
    if well.tubing.h_mes < 0.0 {
        return Err(invalid("tubing.h_mes", well.tubing.h_mes, "must be non-negative"));
    }
    require_finite("h_res", well.h_res)?;
    if well.h_res < well.tubing.h_mes {
        return Err(ValidationError::Geometry {
            what: format!(
                "perforation depth {} m is above the tubing shoe at {} m",
                well.h_res, well.tubing.h_mes
            ),
        });
    }

    require_positive("p_wh", well.p_wh)?;
    require_finite("geo_grad", well.geo_grad)?;
    Ok(())
}

fn validate_inclinometry(incl: &InclinometryDef) -> Result<(), ValidationError> {
    if incl.md.len() != incl.tvd.len() {
        return Err(ValidationError::LengthMismatch {
            md: incl.md.len(),
            tvd: incl.tvd.len(),
        });
    }
    if incl.md.len() < 2 {
        return Err(ValidationError::TooFewStations {
            count: incl.md.len(),
        });
    }
    for (i, (md, tvd)) in incl.md.iter().zip(&incl.tvd).enumerate() {
        require_finite(&format!("inclinometry.MD[{i}]"), *md)?;
        require_finite(&format!("inclinometry.TVD[{i}]"), *tvd)?;
    }
    if let Some(index) = incl.md.windows(2).position(|w| w[1] <= w[0]) {
        return Err(ValidationError::NonIncreasingMd { index: index + 1 });
    }
    Ok(())
}

fn validate_pvt(pvt: &PvtDef) -> Result<(), ValidationError> {
    if !(0.0..=100.0).contains(&pvt.wct) {
        return Err(invalid("pvt.wct", pvt.wct, "must lie in [0, 100] %"));
    }
    require_finite("pvt.rp", pvt.rp)?;
    if pvt.rp < 0.0 {
        return Err(invalid("pvt.rp", pvt.rp, "must be non-negative"));
    }
    require_positive("pvt.gamma_oil", pvt.gamma_oil)?;
    require_positive("pvt.gamma_gas", pvt.gamma_gas)?;
    require_positive("pvt.gamma_wat", pvt.gamma_wat)?;
    require_finite("pvt.t_res", pvt.t_res)?;
    if pvt.t_res <= -273.15 {
        return Err(invalid("pvt.t_res", pvt.t_res, "below absolute zero"));
    }
    Ok(())
}
