//! Property-based tests for image embeddings.

use piqture_embed::{
    Frqi, ImageDims, ImageEmbedding, Neqr, PixelValues, pixel_position, position_qubit_count,
    produce_sub_images,
};
use piqture_ir::{Circuit, QubitId};
use proptest::prelude::*;

fn arb_dims(max: u32) -> impl Strategy<Value = ImageDims> {
    (1..=max, 1..=max).prop_map(|(r, c)| ImageDims::new(r, c).unwrap())
}

proptest! {
    /// Selecting an address twice flips each zero bit twice.
    #[test]
    fn pixel_position_is_an_involution(width in 1_u32..=8, index in any::<usize>()) {
        let index = index % (1 << width);
        let qubits: Vec<_> = QubitId::range(0, width).collect();
        let mut circuit = Circuit::with_size("pos", width, 0);

        pixel_position(&mut circuit, &qubits, index).unwrap();
        let once = circuit.num_ops();
        prop_assert_eq!(once as u32, width - index.count_ones());

        pixel_position(&mut circuit, &qubits, index).unwrap();
        prop_assert_eq!(circuit.num_ops(), 2 * once);

        let mut per_qubit = vec![0_usize; width as usize];
        for inst in circuit.instructions() {
            prop_assert_eq!(inst.name(), "x");
            per_qubit[inst.qubits[0].0 as usize] += 1;
        }
        prop_assert!(per_qubit.iter().all(|n| n % 2 == 0));
    }

    /// Every pixel gets an addressable position.
    #[test]
    fn position_register_covers_image(dims in arb_dims(32)) {
        let width = position_qubit_count(dims);
        prop_assert!(width >= 1);
        prop_assert!(1_usize << width >= dims.num_pixels());
        if width > 1 {
            prop_assert!(1_usize << (width - 1) < dims.num_pixels());
        }
    }

    #[test]
    fn sub_image_count(
        dims in arb_dims(12),
        filter in (1_u32..=12, 1_u32..=12),
        stride in 1_u32..=12,
    ) {
        prop_assume!(filter.0 <= dims.rows() && filter.1 <= dims.cols());
        let pixels = vec![0.0; dims.num_pixels()];
        let patches = produce_sub_images(dims, &pixels, filter, stride).unwrap();

        let along = |size: u32, f: u32| ((size - f) / stride + 1) as usize;
        prop_assert_eq!(
            patches.len(),
            along(dims.rows(), filter.0) * along(dims.cols(), filter.1)
        );
        let patch_len = (filter.0 * filter.1) as usize;
        prop_assert!(patches.iter().all(|p| p.values.len() == patch_len));
    }

    /// FRQI places one controlled rotation group per pixel, padded by
    /// position flips.
    #[test]
    fn frqi_gate_budget(side in 1_u32..=4) {
        let dims = ImageDims::new(side, side).unwrap();
        let mut frqi = Frqi::new(dims, PixelValues::Symbolic).unwrap();
        let circuit = frqi.build_circuit().unwrap();
        let counts = circuit.count_ops();

        let width = position_qubit_count(dims) as usize;
        prop_assert_eq!(counts.get("h").copied().unwrap_or(0), width);
        prop_assert_eq!(circuit.parameters().len(), dims.num_pixels());
        prop_assert_eq!(counts.get("x").copied().unwrap_or(0) % 2, 0);
    }

    /// NEQR writes one controlled X per set color bit.
    #[test]
    fn neqr_controlled_x_per_set_bit(values in prop::collection::vec(0_u8..=255, 4)) {
        let dims = ImageDims::new(2, 2).unwrap();
        let pixels: Vec<f64> = values.iter().map(|v| f64::from(*v)).collect();
        let mut neqr = Neqr::new(dims, pixels, 255).unwrap();
        let circuit = neqr.build_circuit().unwrap();

        let set_bits: u32 = values.iter().map(|v| v.count_ones()).sum();
        prop_assert_eq!(
            circuit.count_ops().get("ccx").copied().unwrap_or(0),
            set_bits as usize
        );
    }
}
