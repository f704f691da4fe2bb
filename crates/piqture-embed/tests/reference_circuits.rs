//! Built encodings compared against hand-written reference circuits.

use piqture_embed::{Frqi, ImageDims, ImageEmbedding, Neqr, PixelValues};
use piqture_ir::{Circuit, ParameterExpression, ParameterVector, QubitId};

const POSITIONS_2X2: [&str; 4] = ["00", "01", "10", "11"];

fn q(i: u32) -> QubitId {
    QubitId(i)
}

/// X on every position qubit whose address bit is `0`.
fn reference_position(circuit: &mut Circuit, binary: &str) {
    for (i, bit) in binary.chars().enumerate() {
        if bit == '0' {
            circuit.x(q(i as u32)).unwrap();
        }
    }
}

fn reference_frqi_value(circuit: &mut Circuit, theta: ParameterExpression) {
    let neg = (-theta.clone()).simplify();
    circuit
        .cry(theta.clone(), q(0), q(2))
        .unwrap()
        .cx(q(0), q(1))
        .unwrap()
        .cry(neg, q(1), q(2))
        .unwrap()
        .cx(q(0), q(1))
        .unwrap()
        .cry(theta, q(1), q(2))
        .unwrap();
}

fn reference_frqi(angles: &[ParameterExpression]) -> Circuit {
    let mut circuit = Circuit::with_size("reference", 3, 0);
    circuit.h(q(0)).unwrap().h(q(1)).unwrap();
    for (pixel, binary) in POSITIONS_2X2.iter().enumerate() {
        reference_position(&mut circuit, binary);
        reference_frqi_value(&mut circuit, angles[pixel].clone());
        reference_position(&mut circuit, binary);
    }
    circuit
}

#[test]
fn frqi_concrete_matches_reference() {
    let dims = ImageDims::new(2, 2).unwrap();
    let mut frqi = Frqi::new(dims, PixelValues::single(vec![0.0, 1.0, 2.0, 3.0])).unwrap();

    let angles: Vec<ParameterExpression> = (0..4).map(|v| f64::from(v).into()).collect();
    assert_eq!(frqi.build_circuit().unwrap(), &reference_frqi(&angles));
}

#[test]
fn frqi_pixel_value_per_pixel() {
    let dims = ImageDims::new(2, 2).unwrap();
    let mut frqi = Frqi::new(dims, PixelValues::single(vec![0.0, 1.0, 2.0, 3.0])).unwrap();

    for pixel in 0..4_u32 {
        frqi.circuit_mut().clear();
        frqi.pixel_value(pixel as usize).unwrap();

        let mut expected = Circuit::with_size("reference", 3, 0);
        reference_frqi_value(&mut expected, f64::from(pixel).into());
        assert_eq!(frqi.circuit(), &expected);
    }
}

#[test]
fn frqi_pixel_position_per_address() {
    let dims = ImageDims::new(2, 2).unwrap();
    let mut frqi = Frqi::new(dims, PixelValues::Symbolic).unwrap();

    for (pixel, binary) in POSITIONS_2X2.iter().enumerate() {
        frqi.circuit_mut().clear();
        frqi.pixel_position(pixel).unwrap();

        let mut expected = Circuit::with_size("reference", 3, 0);
        reference_position(&mut expected, binary);
        assert_eq!(frqi.circuit(), &expected);
    }
}

#[test]
fn frqi_symbolic_matches_reference_after_binding() {
    let dims = ImageDims::new(2, 2).unwrap();
    let mut frqi = Frqi::new(dims, PixelValues::Symbolic).unwrap();
    let vector = ParameterVector::new("Angle", 4);

    let mut built = frqi.build_circuit().unwrap().clone();
    let mut expected = reference_frqi(&vector.params());
    assert_eq!(built, expected);

    let values = [0.3, 1.1, 2.9, 0.05];
    built.assign_vector(&vector, &values).unwrap();
    expected.assign_vector(&vector, &values).unwrap();
    assert_eq!(built, expected);
    assert!(built.parameters().is_empty());
}

#[test]
fn neqr_matches_reference() {
    let dims = ImageDims::new(2, 2).unwrap();
    let pixels = vec![0.0, 1.0, 2.0, 3.0];
    let mut neqr = Neqr::new(dims, pixels, 3).unwrap();

    // two position qubits, two color qubits
    let mut expected = Circuit::with_size("reference", 4, 0);
    expected.h(q(0)).unwrap().h(q(1)).unwrap();
    for (pixel, binary) in POSITIONS_2X2.iter().enumerate() {
        reference_position(&mut expected, binary);
        if pixel & 0b10 != 0 {
            expected.ccx(q(0), q(1), q(2)).unwrap();
        }
        if pixel & 0b01 != 0 {
            expected.ccx(q(0), q(1), q(3)).unwrap();
        }
        reference_position(&mut expected, binary);
    }

    assert_eq!(neqr.build_circuit().unwrap(), &expected);
}

#[test]
fn neqr_larger_image_uses_mcx() {
    let dims = ImageDims::new(4, 4).unwrap();
    let mut pixels = vec![0.0; 16];
    pixels[15] = 255.0;
    let mut neqr = Neqr::new(dims, pixels, 255).unwrap();
    let circuit = neqr.build_circuit().unwrap();

    assert_eq!(circuit.num_qubits(), 12);
    let counts = circuit.count_ops();
    assert_eq!(counts.get("mcx"), Some(&8));
    assert_eq!(counts.get("h"), Some(&4));
}
