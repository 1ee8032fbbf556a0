use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, Z0},
};

/// Molar flux, mol/m²·s in SI.
///
/// Used for boundary-layer and aerodynamic conductances, which follow the
/// molar convention of Campbell & Norman rather than a velocity basis.
pub type MolarFlux = Quantity<ISQ<N2, Z0, N1, Z0, Z0, P1, Z0>, SI<f64>, f64>;
