use bolero::check;
use charybdis::kernels::arx::{
    inverse_mix_f, inverse_mix_g, inverse_mix_h, mix_f, mix_g, mix_h,
};

#[test]
fn fuzz_mix_invertibility() {
    check!().with_type::<[u32; 4]>().for_each(|v| {
        let v = *v;
        assert_eq!(inverse_mix_g(mix_g(v)), v, "MixG");
        assert_eq!(inverse_mix_h(mix_h(v)), v, "MixH");
        assert_eq!(inverse_mix_f(mix_f(v)), v, "MixF");

        // Both composition orders are the identity.
        assert_eq!(mix_g(inverse_mix_g(v)), v, "MixG^-1");
        assert_eq!(mix_h(inverse_mix_h(v)), v, "MixH^-1");
        assert_eq!(mix_f(inverse_mix_f(v)), v, "MixF^-1");
    });
}
