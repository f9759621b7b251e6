#[macro_export]
macro_rules! toJsFloat32Array {
    ($q:expr) => {
        Float32Array::from(
            $q.into_iter()
                .map(|qi| qi as f32)
                .collect::<Vec<f32>>()
                .as_slice(),
        )
    };
}
