//! Charybdis Kernel Constants
//!
//! Every table is the output of SHAKE256 over a public ASCII seed, read as
//! big-endian 32-bit words:
//!
//! ```text
//! ROUND_CONSTANTS                           = SHAKE256("Charybdis-v1.0")[0..352]
//! KS_INIT || KS_ROUND_CONSTANTS || KS_DOMAIN_CONSTANTS
//!                                           = SHAKE256("Charybdis-Constants-v1.0")[0..824]
//! ```
//!
//! Verify: `cargo run -p charybdis-verification --bin charybdis_constants`

use super::word::Matrix;
use static_assertions::const_assert_eq;

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Number of main rounds.
pub const ROUNDS: usize = 22;

/// Number of subkeys: initial whitening, one per round, final whitening.
pub const NUM_SUBKEYS: usize = ROUNDS + 2;

/// Block size in bytes (512 bits).
pub const BLOCK_SIZE: usize = 64;

/// Master key size in bytes (256 bits).
pub const KEY_SIZE: usize = 32;

/// Words per state matrix (4x4).
pub const STATE_WORDS: usize = 16;

/// Words in the key-schedule sponge state (4x8).
pub const KS_STATE_WORDS: usize = 32;

/// Rounds of the key-schedule permutation `F_perm`.
pub const KS_ROUNDS: usize = 16;

/// Lanes processed per AVX2 batch group.
pub const BATCH_LANES: usize = 8;

// =============================================================================
// ROTATIONS
// =============================================================================

/// `MixG` right-rotation amounts.
pub const ROT_G: [u32; 4] = [13, 19, 23, 29];

/// `MixH` right-rotation amounts.
pub const ROT_H: [u32; 4] = [9, 17, 21, 27];

/// `MixF` right-rotation amounts (key schedule only).
pub const ROT_F: [u32; 4] = [11, 19, 23, 29];

// =============================================================================
// KEY SCHEDULE DOMAIN SEPARATION
// =============================================================================

/// Sponge cells receiving the squeeze counter, as `(row, column)`.
pub const KS_COUNTER_CELLS: [(usize, usize); 4] = [(0, 7), (1, 3), (2, 6), (3, 1)];

// =============================================================================
// TABLE SHAPE
// =============================================================================

const_assert_eq!(ROUND_CONSTANTS.len(), ROUNDS * STATE_WORDS);
const_assert_eq!(KS_INIT.len(), 3 * 8);
const_assert_eq!(KS_ROUND_CONSTANTS.len(), KS_ROUNDS * 4);
const_assert_eq!(KS_DOMAIN_CONSTANTS.len(), (NUM_SUBKEYS - 1) * KS_STATE_WORDS);
const_assert_eq!(BLOCK_SIZE, STATE_WORDS * 4);

/// Round constants reshaped into one 4x4 matrix per round (index `r - 1`).
pub const ROUND_CONSTANT_MATRICES: [Matrix<u32>; ROUNDS] = reshape_round_constants();

const fn reshape_round_constants() -> [Matrix<u32>; ROUNDS] {
    let mut out = [[[0u32; 4]; 4]; ROUNDS];
    let mut r = 0;
    while r < ROUNDS {
        let mut pos = 0;
        while pos < STATE_WORDS {
            out[r][pos / 4][pos % 4] = ROUND_CONSTANTS[r * STATE_WORDS + pos];
            pos += 1;
        }
        r += 1;
    }
    out
}

// =============================================================================
// TABLES
// =============================================================================

/// Cipher round constants, 16 words per round: SHAKE256("Charybdis-v1.0").
#[rustfmt::skip]
pub const ROUND_CONSTANTS: [u32; 352] = [
    0x09AB_E449, 0x3DDB_6251, 0xC380_C165, 0x7C7C_336B, 0xC2E8_4709, 0x2822_540C, 0xB129_2CBD, 0x35C1_0D58,
    0x364A_2099, 0x02D8_C517, 0x2E84_00A4, 0x3CE2_C4E9, 0x28D4_2EC1, 0x68B5_DAA2, 0xBB07_BE9E, 0x1385_8972,
    0xFD00_6DF7, 0x4B79_6F9C, 0x4FD4_5A7D, 0x9262_B547, 0x3D5A_02E6, 0x2007_F8ED, 0xF157_C620, 0x2B16_9543,
    0x9065_E406, 0x9366_51BC, 0x263E_092C, 0x1685_67B1, 0xE928_2CE7, 0x6AE8_05DD, 0x9512_D3AE, 0x77D6_C340,
    0x77D8_7F83, 0xBA50_19B6, 0xA407_4C67, 0xF779_426B, 0x2BB7_9CE6, 0xDC09_47BE, 0x1553_28B4, 0xE913_C7D7,
    0x543B_EB4A, 0xD811_E60E, 0xEB7E_DD89, 0x6344_2F04, 0x2F13_CA7F, 0x9690_2BC1, 0xE130_CE64, 0x2CF5_15C7,
    0x03AA_4951, 0x8058_0C51, 0x4AB3_D97B, 0xE759_0DC0, 0xFFBB_6B73, 0x0F0F_6706, 0x6475_2E03, 0xFA5F_BCB2,
    0x7C19_0F62, 0x4589_08F3, 0xE9E3_62E3, 0x7BDE_6448, 0x5A66_A533, 0xDFB2_4DF3, 0xCC2B_3821, 0x5FA3_9BB4,
    0x4F73_277D, 0x5611_DBA6, 0xF14A_ECF2, 0xF6D2_0F69, 0x09A8_4AF5, 0x2A12_7A24, 0x8143_2785, 0x7F34_3AD1,
    0x1756_EBAC, 0xE9E3_0A59, 0xE3FA_CC57, 0xF10A_06D1, 0xAF0E_0EC4, 0xCA4D_5A54, 0x3F6F_ACB8, 0x6654_98B0,
    0x2151_56DD, 0x19ED_1BE1, 0xAE71_47F1, 0xBE1A_ADD7, 0xA28F_B4D8, 0xB3AC_541D, 0xA987_333C, 0x87D3_5536,
    0xCB68_8C94, 0x8CF3_949F, 0xC0FB_B4F0, 0xC0D2_B91E, 0xC898_2223, 0x3C42_9565, 0xA756_0614, 0x202A_030D,
    0xF53A_F63A, 0xE43A_8DDB, 0x5E2E_575E, 0xDD57_DFC8, 0x8C11_2ED6, 0x4CEA_7366, 0x7B06_DD82, 0x51A0_B67E,
    0x25AA_2519, 0x1A1B_9913, 0x15A0_6D28, 0x9503_619E, 0x8F04_1BB2, 0x8EBB_01DF, 0xD210_A991, 0x3A59_0439,
    0x94F1_3D92, 0xD3C3_A42A, 0x07B2_D92A, 0x450D_4F51, 0xCBE6_B134, 0x9073_7167, 0xC95E_A7EB, 0x61AC_9406,
    0x5D97_C1D5, 0x7501_BB29, 0x434D_A233, 0x9066_A57A, 0xB919_2FB4, 0x81F1_A972, 0x6D39_D67A, 0xCC8C_ACEB,
    0x6217_44A2, 0xDBAA_B4FB, 0xBE2F_3851, 0x6488_CA8F, 0x0FF9_2C9B, 0x515D_E568, 0x5919_9265, 0xD3FA_B509,
    0xA8E9_B6FA, 0xD52A_5B51, 0x3F72_D930, 0x6AB7_AE55, 0xF041_13DA, 0x97E0_51E1, 0xCE88_E7C7, 0xF4A0_F228,
    0x4D9C_3A41, 0x7719_C6CE, 0x5180_FD62, 0x9FBB_E2ED, 0x3447_B35D, 0xDB77_70E8, 0x360D_A146, 0x13F2_949B,
    0xDC7D_D59A, 0xE0D8_1339, 0xE32D_84E7, 0x85E3_620A, 0x2DA0_DAC5, 0xCFC5_5BC5, 0x7C07_B0D7, 0x2B65_7CC5,
    0x2EB0_B633, 0xC6A1_BF8B, 0x602F_04CD, 0x1D8D_D0BC, 0x8543_F65F, 0x811B_9066, 0xBD86_9790, 0x0054_2D3C,
    0x778B_7CF0, 0xB239_3E66, 0xCF04_ACC8, 0xD627_77BC, 0xDE65_FC5E, 0xD57E_1734, 0x986C_0E52, 0x3EDC_BE4C,
    0xD48F_DBA7, 0xE9C9_AB85, 0xE216_0D86, 0x848B_CD2E, 0xF611_73CE, 0x8527_CA20, 0x1AF3_BDD3, 0x25F1_61F4,
    0x30BD_9755, 0xF10F_E177, 0xBB0E_2976, 0xBAD3_A975, 0x0033_D3AF, 0x8707_50BD, 0x12A8_D47C, 0xA582_5356,
    0xF595_9E2C, 0x8151_B51B, 0x6862_DE73, 0xBB31_2C3C, 0x9E53_55BF, 0x72ED_4D18, 0x7E4C_C18D, 0x719F_2BE5,
    0x27F3_3D1C, 0x22A4_86CE, 0x8438_9409, 0x4816_8978, 0xFD07_9DC5, 0x7581_4C40, 0x8E9F_941F, 0x13DE_A9F0,
    0xAB7C_7DE2, 0x1645_2A73, 0x06E3_3C9C, 0x1C3F_6D1F, 0x4EFA_BDBF, 0xF275_0B69, 0xCCE8_A407, 0x0EAD_6C92,
    0xF765_A5B8, 0x4ED5_AA31, 0xD8EA_C691, 0xDFE2_984C, 0x0349_D1FB, 0x4D67_DC84, 0x5398_E1FA, 0xDE29_EEEE,
    0x38F3_66B4, 0x68CA_2C8B, 0xC1B3_BED2, 0x041B_FCBD, 0x3E3E_6204, 0x696C_2C63, 0xB41F_C6CE, 0xEE22_9514,
    0x4898_8B17, 0xB995_E9C3, 0x658A_8D9A, 0x055E_A378, 0xB904_E1CB, 0xCD5F_EEB3, 0x03B9_1E48, 0xFD75_CF21,
    0x5BA6_E8AD, 0x7DF9_F99F, 0x306F_14AF, 0x87F5_EB0C, 0x396B_D2A2, 0xF759_9C23, 0xBE85_70C5, 0xC9B6_4ADD,
    0xC392_8B1D, 0x0443_6D28, 0xF8F7_910C, 0x6A78_46D2, 0x5FC3_07F0, 0x4046_5DC0, 0x9044_5674, 0xE428_70AC,
    0xBB17_B82B, 0x8533_81EC, 0xDC9B_9F18, 0xA99C_6476, 0x1194_616E, 0xCA3C_8B06, 0x6DC6_F322, 0x17A3_F18C,
    0x2BFC_1E98, 0x9C2D_A3BF, 0x4ACC_14B4, 0xDF0D_FDE4, 0x5958_A8F2, 0x2CA0_73FC, 0x4791_B19F, 0x1094_CEC2,
    0xDC47_6A57, 0x9CF2_B91D, 0xCE9F_A41C, 0x4C4D_DC5F, 0x2657_F8B9, 0xBD70_AA92, 0x65AA_BD79, 0x2D26_9C1D,
    0x4C14_1B65, 0x67A9_533D, 0xF891_9053, 0x05AA_A3AF, 0x6D84_4A3A, 0xE342_2F83, 0x569C_246B, 0x93BC_D2D5,
    0xF803_C8C4, 0x498A_7C16, 0xF990_BE9D, 0x83E1_6722, 0x64E0_79AC, 0x073F_1607, 0x7073_3F3A, 0x8F57_9AD0,
    0xD95D_D747, 0x1E2F_B545, 0x24A2_5404, 0xE026_9BA9, 0xCD0A_4CB2, 0xB3A1_A142, 0x38C9_DE48, 0x8046_29DE,
    0x0FFB_734E, 0x23E8_F5C7, 0x975E_FFC3, 0xCC69_CA57, 0x6F72_BCF4, 0xCDFA_14A4, 0xBA5D_6DF2, 0xB75D_44E4,
    0x0B6C_3002, 0xF22F_5A5F, 0xEF66_B79E, 0x5645_6B1B, 0xDA9B_3759, 0x6709_2DFD, 0x6D21_A8D9, 0xC002_A278,
    0x27DB_F77A, 0x6F9D_B625, 0x30C6_22AF, 0x72EF_B64E, 0x7783_D27C, 0x7ADE_A18A, 0xE032_424A, 0x910E_0FD5,
    0x8E21_12F8, 0xE427_8E2C, 0x6340_1CEA, 0x710E_3EDC, 0x3C83_A7F8, 0xA4D5_FB9A, 0xAD4B_D798, 0xD5B1_C72E,
    0xA49F_63A0, 0x4C02_0B00, 0xA050_2BC6, 0xED56_90F7, 0xDEE3_3D1B, 0xE99E_A2BF, 0x7E29_ACBF, 0x5CFE_D974,
    0x4DE5_601D, 0x6842_9B27, 0xBBD6_B951, 0x371F_8DC8, 0xDE8B_EC28, 0x3865_E536, 0x43D7_A05D, 0xBC73_1F08,
];

/// Key-schedule state rows 1..=3 at initialization.
#[rustfmt::skip]
pub const KS_INIT: [u32; 24] = [
    0xBD9A_3A61, 0xD84F_43D2, 0x8194_DFDE, 0x5CB0_4029, 0x22A7_C7A9, 0x4F09_6DED, 0x785F_4AC0, 0xEAD4_D3BE,
    0x2413_2CEB, 0x3C26_A408, 0x0E8A_BAB4, 0xC4EA_F2E0, 0x30F9_8C45, 0x68AA_C99C, 0x1B0F_630C, 0xE3C7_E561,
    0x19D0_5E5C, 0xC042_E4D5, 0x4797_EB1B, 0xDEF0_0CA6, 0x62DB_6702, 0xC6A9_C3A5, 0x0ACC_D1EF, 0xD1C8_BCCA,
];

/// `F_perm` diagonal constants, 4 words per round.
#[rustfmt::skip]
pub const KS_ROUND_CONSTANTS: [u32; 64] = [
    0x3E98_EF87, 0x4BCE_334C, 0xD168_DED4, 0x85E3_E548,
    0xCA39_8279, 0xBD79_42AA, 0xA619_0439, 0x47EF_BB5C,
    0x8C35_5F74, 0xE802_18A6, 0x7178_2BC0, 0x90BE_95DE,
    0x99DE_60E1, 0x4CB3_B234, 0xD007_67B7, 0x6F85_9650,
    0x12F7_221D, 0x5AB7_99D8, 0x88A9_026E, 0xDC16_FD26,
    0xEA2D_C5C2, 0x4FFB_7C63, 0x4DDF_1E6F, 0xCF17_F3CB,
    0x3F12_E663, 0x22E3_3B11, 0x1E1B_D097, 0x10DE_B2F9,
    0x53E3_FB3B, 0xAC19_AE00, 0xD422_9837, 0xFC80_8D4F,
    0xEE33_C798, 0xC3CA_41BB, 0x8EEF_A083, 0xE384_1110,
    0x753A_29FB, 0x77D0_8286, 0x20D9_6B4B, 0x1D1E_520F,
    0xD0C1_B4D9, 0xFB52_AB02, 0x822B_A801, 0xAB60_5DE0,
    0xE462_8371, 0xA703_DC62, 0x26EE_F620, 0x5456_80F7,
    0x79AF_2D28, 0x85A1_9B6A, 0xC7D6_74CC, 0x75E4_59A9,
    0xC0DC_0A33, 0x8D74_272B, 0x3284_04A5, 0x6E4C_D691,
    0xCEE8_EBED, 0x2F25_4E8B, 0x1A27_665A, 0x51A3_9984,
    0xB049_AA63, 0xB529_877B, 0x0DB0_26E9, 0x89C6_2BC4,
];

/// Full-state XOR masks applied between squeezes, 32 words per step.
#[rustfmt::skip]
pub const KS_DOMAIN_CONSTANTS: [u32; 736] = [
    0x22CE_1456, 0x855F_CC07, 0x38FA_C46E, 0x84DB_64E7, 0xB56E_62D4, 0xFB17_9D45, 0xA877_D120, 0x20DB_A111,
    0x52B4_EA96, 0x6320_42F7, 0x717E_08F1, 0xEFDF_9BE4, 0x0836_9D2D, 0x3990_F255, 0x7E1F_99D4, 0x9F36_6498,
    0x39C3_E39F, 0x9942_0A7D, 0xDC82_3582, 0x140C_77C5, 0x1D06_46D9, 0x5960_06DA, 0xD553_C7A5, 0x5201_BECC,
    0x86EE_9B90, 0x16B5_33EA, 0x2EF6_7C09, 0xF0E7_174D, 0x1020_8A50, 0x6220_3E26, 0xB2A8_65EA, 0x62D8_0231,
    0x7806_CE61, 0x4A97_EC1A, 0x8702_8442, 0x1B4A_6733, 0xF254_0FB7, 0x0F9C_E941, 0xCE80_F760, 0xB65C_7F67,
    0x7A1C_43D9, 0x071B_CFE6, 0x103B_7FE6, 0x3287_FC5F, 0xF52A_4F41, 0x0D98_C4A5, 0x9B37_7109, 0xA16D_E3D0,
    0xD3C2_D8C2, 0x18AC_BB65, 0x4917_CC8C, 0x03E0_0F0F, 0x53C9_CD61, 0xA3D7_F320, 0x47E6_72E4, 0x9008_4B9A,
    0xBB0E_27A4, 0x526D_AEA1, 0xBB3A_051C, 0x58A1_42FE, 0xD31F_84D0, 0xFBE6_A228, 0xF141_3B72, 0xE375_AB21,
    0x1EBF_7F5A, 0x968D_674B, 0xAD9C_1F24, 0x65E5_B273, 0x6B2B_36B0, 0xAC0A_32F8, 0xC064_67CB, 0x5859_E7FA,
    0x4828_422F, 0x4281_F376, 0x9DE0_7037, 0x116F_E065, 0x208D_31E2, 0x7DA3_BAFA, 0xD1FE_7944, 0x2D68_17C2,
    0xE185_3EE2, 0x4CE4_5237, 0x4B37_D13A, 0x1B35_6A6D, 0xF8DD_B2A6, 0x0863_569A, 0xF44E_3DD2, 0xA7C6_778E,
    0xCD0D_8CC8, 0x33EA_7F1B, 0x2CAD_2545, 0x3F3B_795B, 0xBAB3_DB6C, 0xCE1C_939B, 0xDF7B_ABB1, 0x7A4F_4F31,
    0x0ACD_88AA, 0x8C9F_6FCF, 0x822F_E1F6, 0xED0E_9EDF, 0x6B39_F9CD, 0xA8F1_4315, 0x7FCE_61F5, 0xE612_5AF6,
    0x4A0C_4640, 0x47B8_233B, 0x1E9D_0330, 0x5B47_A121, 0xDCD4_43FD, 0x8124_A733, 0x9CF7_DECE, 0x46C4_633A,
    0x5E11_18BA, 0x0E9A_FA30, 0x80B9_700D, 0xB7F6_6BDF, 0x722F_B410, 0x7E6F_01FB, 0x2E08_D391, 0xDD42_9EA5,
    0x19FB_306E, 0xF137_1732, 0x0FE0_0930, 0xD7A5_CE21, 0xD046_8078, 0x9AA9_F859, 0xDB44_C4BA, 0xA5F3_2457,
    0x7171_4286, 0x1020_C0F7, 0x79B1_D11D, 0x5C16_FAFE, 0xEB98_8E90, 0x826E_42C4, 0x4CB4_E340, 0xCB6D_4A43,
    0x4800_D3E1, 0xE376_0040, 0xCA4B_2BA7, 0xF953_64A0, 0x7F58_C0C8, 0xBA46_D6F8, 0x1BB0_7996, 0xC8CC_BA43,
    0x5E63_2CC9, 0x0497_D257, 0xD58F_DF2C, 0x1D11_3729, 0x7CEA_7886, 0x14A8_15EB, 0xA659_2A36, 0x619C_92F0,
    0x354D_9C3C, 0x573E_61A4, 0xC236_724D, 0xFB6B_B3E8, 0x76CD_8756, 0xB6F8_1B16, 0xF81E_90EF, 0x3447_F438,
    0x6F8A_51C8, 0xAD11_B6A7, 0xE666_69A1, 0x09F1_A5E0, 0x5160_CC90, 0x6B64_5070, 0x33CA_9D18, 0x1622_CC5F,
    0xFFF4_3803, 0xC915_A337, 0x9B15_9F26, 0xDF44_8F5B, 0x0622_1AB0, 0xB5B4_3610, 0x3DBC_8BCE, 0x4D34_903D,
    0xE384_73AB, 0x1D43_A01D, 0xF075_D6F4, 0x7CDF_0536, 0xBFF7_2C04, 0x3410_72BB, 0xA151_438B, 0x90FF_CD7C,
    0xCCFC_7730, 0xE699_E52B, 0x2503_333F, 0xE560_CE46, 0x097C_1FF2, 0x1DFC_436D, 0xBD0B_771B, 0xE5FE_82AC,
    0xA7D8_AD78, 0xA095_25C2, 0xA639_123F, 0x02B6_032A, 0xF663_0285, 0x9F20_BC92, 0xC1DD_C378, 0x93BB_01F7,
    0xD525_B1EA, 0xE81E_51E9, 0x3214_523E, 0xA3C3_E9B7, 0x561A_E34D, 0x01C0_3738, 0xC376_5951, 0xECE5_3DA8,
    0x6ACE_947F, 0xC02E_277C, 0xBD7A_09A7, 0x8626_2FA8, 0x0935_6168, 0x4782_E19C, 0x238F_43EB, 0x7525_05C0,
    0x4A5A_C809, 0x11B6_12B4, 0xDEDE_B99C, 0xECA8_8F4C, 0xAEE5_33F3, 0xA65E_47DE, 0xAA1E_06D0, 0x647B_686E,
    0xF73F_0875, 0x922C_11F7, 0x2B8E_4093, 0xE537_19EC, 0x1F25_AEE9, 0xE228_07F5, 0x44FD_58F9, 0x4ABB_0E55,
    0xB60D_1945, 0x6E5E_A63E, 0x20F6_70CA, 0x39FD_277C, 0xABDE_DA94, 0x8E76_376F, 0x2F41_DE2D, 0x62A0_2947,
    0xA773_71A2, 0xB026_7225, 0x1729_8DF5, 0x6963_AEF0, 0x017E_01BF, 0x806B_D05B, 0x61DC_F1D5, 0xBF5A_C48C,
    0x8CDA_F769, 0x72DB_8F04, 0x3558_CAA6, 0x9824_C4A5, 0xDCE2_A789, 0x181A_9CC0, 0xC201_D362, 0xEAB0_C7BA,
    0x1EB6_740B, 0x41CF_FECD, 0xBD8B_EA2C, 0x053B_50B2, 0x5E0D_FFED, 0x980C_166D, 0x39CB_8275, 0xEF60_6F5F,
    0x5F5A_3EA6, 0x6BBE_7405, 0x5860_69F8, 0xC357_5F7A, 0xD815_7384, 0x24EB_5F80, 0x7115_4DA5, 0xE7EC_6D5E,
    0xEEA0_F201, 0x34E9_698C, 0xCBE7_8B5D, 0xD5BA_D20F, 0xD5EF_CF19, 0x7606_C3F8, 0x04D3_3AD8, 0xD7EA_7DD9,
    0x02BE_9D14, 0xD1D6_A7AC, 0xFDBE_831C, 0xF4F0_4B88, 0x9423_A385, 0xBE46_83F7, 0x3245_A05A, 0xF0B6_9A5D,
    0x1090_2684, 0xC070_9C18, 0x11CD_CDCE, 0x927F_1AF8, 0x9D19_4DE3, 0x18E7_0118, 0x2996_B0FF, 0x7358_3F92,
    0xC4EC_BE6F, 0xD321_22D8, 0xEF67_4DA3, 0x30CF_0437, 0x6842_2E47, 0xFA56_0394, 0xD514_B48D, 0xA3C7_A099,
    0x2824_227B, 0xED40_23E5, 0xDE57_B213, 0x333A_A2F0, 0xE1E0_F7B4, 0x29FF_81A2, 0xD009_B331, 0x7639_BDC9,
    0xC6D1_3D0D, 0x19F8_3103, 0x2DDA_9CB5, 0x5B45_9F34, 0xA6D4_AAED, 0x4E1E_0411, 0x94F7_AE6C, 0xADEB_1104,
    0xB07F_C6BE, 0x8129_42B8, 0x1B74_70B5, 0xD5E3_6B64, 0x4848_2336, 0x5984_B611, 0xFB88_5828, 0xA5BC_76AD,
    0xA325_3FD6, 0x2745_3356, 0x1032_9746, 0x3725_158F, 0xF878_BAC3, 0xE0F6_ADFE, 0x8558_D21D, 0x9A09_AE1D,
    0x457B_20C5, 0xD0A9_E2ED, 0xD9A1_A422, 0x1381_58EF, 0x4519_34C5, 0xBE9E_817B, 0xEE41_AA0F, 0xBBFB_0458,
    0x018F_302F, 0x44F9_BEEE, 0x899F_A73B, 0x762B_E12A, 0x0843_833D, 0xC524_F5BD, 0x37BE_4D1D, 0x9BFA_46CB,
    0xC6F0_9F16, 0x4CB6_1B4B, 0xFE42_41F9, 0xF006_506C, 0x8398_0704, 0x84B6_1DC3, 0xA456_78AA, 0x80F4_19BF,
    0xBC6B_E42F, 0xF557_9833, 0xB594_B6E1, 0x4B31_F440, 0x1074_234D, 0x99F7_4794, 0x97C5_CB09, 0x4077_3CDD,
    0xB712_24A7, 0x9318_CF09, 0xFC31_098C, 0x6C56_B989, 0x2B09_D66C, 0xD161_3A46, 0x67C5_7CCC, 0x1254_DA02,
    0x77CA_4685, 0x43B3_EAB9, 0x5438_E86A, 0x1710_7EDA, 0x8234_CAB1, 0x563D_94DD, 0xC735_5E8D, 0x90F9_A5FC,
    0x156B_A1E5, 0x28DE_2C9C, 0xFAAB_8FC9, 0x9A5A_446C, 0x0D04_2329, 0x5DF3_BC21, 0x95AE_4A78, 0x4536_7FA2,
    0x8501_FA08, 0xDBE3_CE56, 0x2A6A_BB4C, 0xB566_E4C7, 0x3BBD_ECA5, 0x6E5F_CCEF, 0x8246_AA44, 0x29A1_D56D,
    0x260B_81D4, 0x926B_39F7, 0x75EC_B709, 0x06E8_2EF9, 0x652C_2DB7, 0x12FC_5CD7, 0x27AD_D593, 0x2E37_FEE7,
    0x8FAA_3C11, 0x3212_4637, 0xFE83_84AE, 0x50E3_74A8, 0x3104_3B6B, 0x71E7_B1BC, 0x931B_4DEA, 0x00B8_38E8,
    0xF591_31B0, 0x4EFA_7058, 0x3FF9_7734, 0xBD89_C80C, 0x4337_7D47, 0x4107_83C5, 0xD223_823B, 0x9065_C23C,
    0xE92C_8802, 0x6ED7_F8AE, 0x1952_BFF3, 0xFE16_71BE, 0xA144_5A36, 0x64DC_1A84, 0xBCA5_D2E0, 0x687B_6F8E,
    0x8DCD_77D3, 0xBDC9_5C5F, 0xF044_A0F6, 0x1956_085A, 0x86D4_F4CE, 0x1D49_59A7, 0xC5FA_2991, 0x040C_AF10,
    0x0BC1_753B, 0x9E42_DAB9, 0xE268_50B0, 0xD0CF_49B3, 0x650C_5EE2, 0x2034_77D1, 0xCA0F_FA21, 0x98F8_1713,
    0xB1E1_343C, 0xE200_CC29, 0x8F78_EB3C, 0xA43B_24A7, 0x49AC_5EE2, 0x381C_DB9D, 0x00C7_E627, 0x94E5_B120,
    0x63AF_599D, 0xCA6B_15EF, 0xA45B_EE6D, 0xCAE0_9D89, 0x82D6_8B8C, 0xB89E_3BCE, 0x6C73_4A99, 0x6C7A_E5D7,
    0x5760_AD5C, 0xE278_7A4E, 0x7913_13D6, 0x3F14_7875, 0x738B_8076, 0xA926_D787, 0x3615_7259, 0x8884_94AE,
    0xD0E7_AB0C, 0x12DC_6525, 0x5029_E715, 0x78CB_4960, 0xE43F_55B9, 0xD93F_B4F8, 0x1DE1_270E, 0x83AC_5601,
    0xC9B8_E507, 0x75C6_5EC7, 0x95B9_73F4, 0x9F63_59A6, 0xD72C_1E0A, 0x2FBB_DD03, 0x7CD8_355E, 0x90A8_8C93,
    0xD75F_D14F, 0xAAF3_B740, 0x4A6D_CF79, 0xC84B_79E4, 0x9D67_C6DF, 0xB070_8CDF, 0x70B7_17CE, 0x7CF1_5940,
    0xE615_EED0, 0xB1CF_70D8, 0x6862_B2AD, 0x35C2_9C9A, 0xC926_FE74, 0x10F1_4EC3, 0x578D_0B76, 0xA3E8_5245,
    0xA6B0_432C, 0x35A7_0C35, 0x51C1_6A94, 0x8E3E_FE48, 0xBF61_E2E5, 0x9ADE_57D2, 0xDBE8_7605, 0x894E_88CC,
    0x5FAE_3426, 0xBD03_78B8, 0x8F46_B88D, 0xBEAA_2111, 0x0B55_0FE6, 0xF3F8_6BB9, 0x590C_8B3B, 0x8FE3_D624,
    0x01B2_AE8B, 0x8ED8_AA1E, 0x2121_C3B1, 0x4170_AD19, 0x95FA_6410, 0x3062_03F1, 0xC42C_FA3B, 0xEC95_B38D,
    0xC8E9_7BF8, 0x995B_7974, 0x5797_C079, 0x7279_F56E, 0x4053_5896, 0x97F3_1D52, 0xCF6B_6EFA, 0x29E3_6D1A,
    0x6BC4_360E, 0x1F5D_075E, 0xB5AB_E8E0, 0x73BD_527C, 0xBDC0_CAEE, 0x2FCA_3439, 0xAC15_8E3F, 0x5162_C831,
    0xBAA0_3FD4, 0xE868_1EF3, 0xF050_E351, 0x61BE_1BC8, 0x1B89_24D1, 0xF359_497E, 0xFB67_5803, 0xFAFA_6969,
    0x1BD7_E5AE, 0x78AB_E0CE, 0xD5ED_AC01, 0x14D2_0C79, 0x94DB_9B56, 0xBE99_714E, 0x4AF7_878F, 0x122F_2F03,
    0x83FE_0872, 0x9615_AAA7, 0x2A24_98C0, 0x1C1D_A978, 0xC35B_F48A, 0xCCD8_A0D1, 0xCE77_E888, 0xE45F_64AA,
    0x4487_ED16, 0xB940_3459, 0xF101_49A1, 0x7ECA_D37B, 0xE5C7_AEEA, 0x793B_F2B9, 0x4CB2_1DC5, 0xEDF8_5077,
    0x6057_ABD1, 0x5BDF_092A, 0x67E5_34C0, 0xD065_6104, 0x4463_E438, 0x0022_4F00, 0xE3FF_E54A, 0xB763_DFCF,
    0xB58D_B016, 0x1DAE_DE7A, 0xF786_93A4, 0xA7B1_EA2B, 0xB9F2_9135, 0xA364_7580, 0x0FDC_63E3, 0x6F48_A15E,
    0xE1BE_1BD5, 0x676B_CE86, 0x7718_3864, 0x064C_47E6, 0x6442_C895, 0x0CA8_E797, 0x3734_E951, 0xF058_7109,
    0x3A8D_93F6, 0x298A_8763, 0xB4CE_3D8C, 0xB5FC_9F6B, 0xEB55_CC34, 0xEEA4_A256, 0x4117_A8F9, 0xD449_4E16,
    0x4B1A_F706, 0x451B_2152, 0xFB13_69C9, 0xC561_79DC, 0xD826_67E1, 0x0409_415C, 0x36B8_AAE3, 0x5DA5_B221,
    0x6416_C150, 0xC6AD_3978, 0x3AA4_CF8F, 0x92D9_CE71, 0x9443_4AE1, 0x843A_142D, 0xE967_AC8D, 0x74A2_C72E,
    0xC71F_1D76, 0x127C_DEF2, 0xA8F8_9D15, 0x6621_7E0C, 0xDE40_E4B1, 0x0DF2_04FF, 0x33CC_EC4E, 0xFFA4_010A,
    0x9E04_6DC9, 0x7D9B_8830, 0xA7C9_7AE5, 0xD1E0_9827, 0x282B_691B, 0x42D7_A075, 0x9028_B59C, 0x11A9_9F93,
    0xF978_A706, 0xCA1E_BAA0, 0x6F4C_E324, 0x3D67_A545, 0xB34B_83DC, 0xB5BA_E4D2, 0x8D5A_1E13, 0xD3C4_E7D7,
    0xFC4C_B29E, 0x86E3_55C6, 0x29C2_8275, 0x6C78_5D4D, 0x4E68_597F, 0x2F3B_84DF, 0x2CD0_EC84, 0x2B8D_B068,
    0x0908_0ADB, 0xE533_9B93, 0x4121_E5A9, 0x8BF7_4878, 0x7DAB_0E3B, 0xE360_14B0, 0xEE4D_94FF, 0xCFC6_EDA4,
    0xBBF0_9C6B, 0x44AD_54BF, 0x0900_2389, 0x7E06_6644, 0xBBAA_31E7, 0xCA3E_12AF, 0x4F86_8CCD, 0xCF66_A3FD,
    0xFF04_C32D, 0xA1B8_EEF7, 0x557C_3A55, 0x146C_4C48, 0xDC0A_E619, 0x9C83_8205, 0x4CE5_6B4B, 0xB65B_EB48,
    0xEADD_51B2, 0x720E_CAEF, 0x930C_59AA, 0x3EA5_4588, 0x217E_4671, 0x7938_1076, 0x2C0E_8267, 0xFA60_3793,
    0xAC18_C230, 0x25B7_3579, 0xCC0A_7C09, 0xD3FF_19ED, 0x1E29_687D, 0xD342_A269, 0x6232_0599, 0xE862_5E58,
    0x4114_5969, 0x92DE_FAD5, 0x783B_3540, 0x8DC3_B30E, 0xEA05_D388, 0xDD6E_80E4, 0x1B74_0DAE, 0x5549_2B16,
    0xC84C_35CF, 0x01AA_B686, 0x6C15_CCDF, 0x3BD0_A308, 0x9711_BF3E, 0x434B_CB23, 0x0FEB_A9C2, 0xBFD3_9959,
    0xA0C1_F88E, 0x7A74_6D9F, 0x292B_ADFE, 0xAC8E_8FC3, 0x4773_5CF6, 0xC567_D657, 0x5B49_5FD9, 0x6508_8777,
    0xE928_7AE2, 0xC63E_AE26, 0x6762_3D30, 0x15F0_8A60, 0xA9DC_1380, 0xB29A_6CBE, 0x404C_7021, 0x74A7_F30B,
    0xFD94_8534, 0x811B_A8DA, 0x039D_ED43, 0xCCFD_8049, 0x1EC7_DC54, 0x232D_1997, 0x1AA0_0300, 0xB991_7B0A,
];
