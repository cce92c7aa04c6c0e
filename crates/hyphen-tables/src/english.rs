// Embedded default English data asset.
//
// The weight matrices derive from the classic statistical digram tables
// for English typeset text; the suffix records cover the common derivational
// endings. Treat this module as data, not code: entries are tuned against
// reference text and revised as an asset, never edited ad hoc.
//
// Weights are signed: positive encourages a break between the surrounding
// letters, negative discourages one, zero means "no signal".

use hyphen_core::Weight;

use crate::digram::{BEGINNING_SIZE, MATRIX_SIZE};

/// Word-beginning weights, indexed by the letter after the break.
/// Covers only the first half of the alphabet; see `BEGINNING_SIZE`.
pub const BEGINNING: [Weight; BEGINNING_SIZE] = [
    48, 0, 32, 0, 32, 0, 0, 32, 0, 0, 32, 0, 32,
];

/// General mid-word pair matrix, row-major by (left, right) letter index.
pub const GENERAL: [Weight; MATRIX_SIZE] = [
    6, 34, 33, 83, 17, 20, 51, 34, 2, 35, 17, 1, 18,
    96, 0, -128, 3, -80, 6, 0, 112, 7, 0, 96, 0, -48,
    -112, 0, 112, 5, -96, 8, 0, 64, 6, 0, -128, 0, -48,
    -96, 0, 80, 3, 96, 0, 0, -96, 8, 0, -112, 0, 112,
    34, 19, 33, 32, 32, 18, 35, 33, 24, 52, 17, 0, 33,
    64, 0, 96, 0, -112, 6, 0, 96, 3, 0, -128, 0, 0,
    -128, 0, 80, 2, -112, 8, 0, 112, 6, 0, 96, 0, -48,
    16, 0, 16, 0, 16, 0, 0, 16, 0, 0, 16, 0, 0,
    35, 115, 53, 36, 18, 35, 68, 34, 49, 102, 49, 0, 7,
    64, 0, 96, 0, 32, 0, 0, 64, 0, 0, 80, 0, 0,
    96, 0, 32, 9, 48, 4, 1, 80, 3, 0, 96, 0, 32,
    -128, 0, 64, 0, 96, 0, 0, 96, 0, 0, 96, 0, -96,
    -128, 0, 96, 0, 112, 0, 0, -112, 0, 0, 96, 0, -96,
    -128, 0, 96, 0, 112, 0, 0, -112, 0, 0, 48, 0, -96,
    17, 35, 33, 81, 32, 19, 34, 3, 98, 34, 49, 1, 18,
    80, 0, 96, 8, 96, 8, 0, 96, 2, 0, 80, 0, 80,
    0, 0, 0, 0, -16, 0, 0, 0, 0, 0, 112, 0, 0,
    64, 0, 32, 5, 80, 0, 0, 64, 0, 0, 48, 0, 96,
    96, 32, 64, 1, -96, 33, 0, -94, 0, 2, 96, 0, 64,
    -96, 0, 80, 2, -128, 0, 0, -48, 7, 0, -96, 0, -32,
    65, 17, 33, 16, 32, 5, 34, 81, 2, 17, -127, 0, 16,
    112, 0, 64, 0, 96, 0, 0, 112, 6, 0, -112, 0, 96,
    96, 0, 16, 1, 16, 0, 0, 64, 1, 0, -64, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    70, 33, 32, 103, 32, 0, 51, 33, 1, 66, 112, 2, 2,
    -64, 0, 32, 15, 96, 15, 0, -96, 0, 0, 96, 0, 80,
    -128, 0, 96, 81, -96, 0, -128, 96, 6, 0, 96, 0, 0,
    16, 0, 0, 0, 0, 0, 0, 96, 0, 0, 96, 0, 32,
    0, 35, 33, 32, 0, 34, 33, 33, 0, 0, 0, 0, 64,
    80, 0, -128, 0, 112, 0, 0, 96, 0, 0, 0, 0, 0,
    -128, 0, 0, 0, -96, 0, 0, 80, 6, 0, 0, 0, 0,
    0, 0, 96, 0, -128, 0, 0, 96, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, -96, 0, 0, 0, 0, 0,
    114, 34, 64, 68, -94, 33, 97, 64, 22, 1, 97, 0, 98,
    96, 0, 80, 0, 96, 0, 0, 96, 0, 0, 64, 0, 0,
    97, 33, 96, 0, 96, 1, 0, 96, 34, 0, 96, 0, 98,
    0, 0, 96, 0, 0, 0, 0, 96, 0, 0, 0, 0, 0,
    113, 0, 96, 0, -112, 0, 0, 96, 84, 0, 0, 0, 0,
    0, 0, 0, 0, 113, 0, 0, 96, 0, 0, 0, 0, 0,
    0, 35, 98, 33, 0, 0, 97, 0, 0, 0, 0, 0, 98,
    80, 0, 96, 0, 112, 0, 0, 0, 0, 0, 0, 0, 0,
    96, 0, 0, 0, -112, 0, 0, 0, 34, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    113, 0, 0, 0, 96, 0, 0, 80, 34, 0, 0, 0, 0,
    80, 0, 0, 0, 96, 0, 0, 0, 0, 0, 0, 0, 0,
    97, 0, 96, 0, 0, 0, 0, 0, 34, 0, 0, 0, 0,
    0, 0, 96, 0, 0, 0, 0, 96, 0, 0, 0, 0, 0,
    97, 0, 96, 0, 0, 0, 0, 0, 0, 0, 0, 0, 98,
    80, 0, 96, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    97, 0, 0, 0, -96, 0, 0, 0, 34, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Word-ending pair matrix, consulted near the end of a word.
pub const ENDING: [Weight; MATRIX_SIZE] = [
    5, 104, 107, 50, 50, -90, 106, 87, 102, -125, -56, 15, -122,
    64, 0, 80, 0, 96, 0, 0, 64, 0, 0, 80, 0, 48,
    64, 0, 32, 0, 48, 0, 0, 48, 0, 0, -112, 0, 32,
    64, 0, 80, 0, -128, 0, 0, 64, 0, 0, 96, 0, 48,
    35, 98, 38, 96, 50, 103, -120, 89, 38, 70, -90, 15, 73,
    48, 0, 16, 0, 48, 0, 0, 32, 0, 0, 64, 0, 0,
    48, 0, 32, 0, 32, 0, 0, 32, 0, 0, 64, 0, 32,
    64, 0, 64, 0, 64, 0, 0, 32, 0, 0, 64, 0, 96,
    54, 37, 101, 96, 0, 56, -1, 24, 88, 67, 3, 15, 6,
    32, 0, 32, 0, 16, 0, 0, 32, 0, 0, 64, 0, 0,
    -128, 0, 16, 0, 96, 0, 0, 80, 0, 0, 80, 0, 32,
    80, 0, 32, 0, 48, 0, 0, 48, 0, 0, 112, 0, 32,
    80, 0, 32, 0, 80, 0, 0, 32, 0, 0, 112, 0, 32,
    80, 0, 16, 0, 96, 0, 0, 80, 0, 0, 96, 0, 32,
    41, 86, 104, 96, 48, -120, 102, 6, 6, 117, 3, 15, -92,
    80, 0, 32, 0, 112, 0, 0, 96, 0, 0, 48, 0, 96,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    96, 0, 96, 0, 48, 0, 0, 64, 0, 0, 96, 0, 16,
    80, 0, 16, 0, 48, 0, 0, 48, 0, 0, 48, 0, 32,
    96, 0, 16, 0, 64, 0, 0, 96, 0, 0, 96, 0, 16,
    56, 85, 41, 114, 80, 69, 86, 68, 6, 36, 0, 15, 42,
    96, 0, 16, 0, 96, 0, 0, 48, 0, 0, 48, 0, 32,
    16, 0, 0, 0, 16, 0, 0, 0, 0, 0, 0, 0, 48,
    96, 0, 112, 0, -128, 0, 0, 96, 0, 0, 0, 0, -96,
    53, 34, 48, -128, 0, -120, -110, 102, 6, -124, -112, 10, 3,
    -96, 0, 16, 0, 80, 0, 0, -128, 0, 0, -128, 0, -96,
    64, 0, 80, 0, 96, 0, 0, 64, 0, 0, 80, 0, 48,
    64, 0, 32, 0, 48, 0, 0, 48, 0, 0, -112, 0, 32,
    64, 0, 80, 0, -128, 0, 0, 64, 0, 0, 96, 0, 48,
    35, 98, 38, 96, 50, 103, -120, 89, 38, 70, -90, 15, 73,
    48, 0, 16, 0, 48, 0, 0, 32, 0, 0, 64, 0, 0,
    48, 0, 32, 0, 32, 0, 0, 32, 0, 0, 64, 0, 32,
    64, 0, 64, 0, 64, 0, 0, 32, 0, 0, 64, 0, 96,
    54, 37, 101, 96, 0, 56, -1, 24, 88, 67, 3, 15, 6,
    32, 0, 32, 0, 16, 0, 0, 32, 0, 0, 64, 0, 0,
    -128, 0, 16, 0, 96, 0, 0, 80, 0, 0, 80, 0, 32,
    80, 0, 32, 0, 48, 0, 0, 48, 0, 0, 112, 0, 32,
    80, 0, 32, 0, 80, 0, 0, 32, 0, 0, 112, 0, 32,
    80, 0, 16, 0, 96, 0, 0, 80, 0, 0, 96, 0, 32,
    41, 86, 104, 96, 48, -120, 102, 6, 6, 117, 3, 15, -92,
    80, 0, 32, 0, 112, 0, 0, 96, 0, 0, 48, 0, 96,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    96, 0, 96, 0, 48, 0, 0, 64, 0, 0, 96, 0, 16,
    80, 0, 16, 0, 48, 0, 0, 48, 0, 0, 48, 0, 32,
    96, 0, 16, 0, 64, 0, 0, 96, 0, 0, 96, 0, 16,
    56, 85, 41, 114, 80, 69, 86, 68, 6, 36, 0, 15, 42,
    96, 0, 16, 0, 96, 0, 0, 48, 0, 0, 48, 0, 32,
    16, 0, 0, 0, 16, 0, 0, 0, 0, 0, 0, 0, 48,
    96, 0, 112, 0, -128, 0, 0, 96, 0, 0, 0, 0, -96,
    53, 34, 48, -128, 0, -120, -110, 102, 6, -124, -112, 10, 3,
    -96, 0, 16, 0, 80, 0, 0, -128, 0, 0, -128, 0, -96,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Context pair matrix, consulted when an explicit hyphen already
/// appeared earlier in the word.
pub const CONTEXT: [Weight; MATRIX_SIZE] = [
    26, 102, 34, 71, 62, 66, 34, 102, -126, 40, 6, 0, 41,
    30, -1, 47, 11, 47, -10, -1, 47, 1, -1, 47, 0, 32,
    31, -1, 16, 0, 64, 18, -1, 47, -14, 78, 64, 0, 15,
    47, -1, 47, 25, 95, -13, -1, 31, -14, -72, 63, 0, 79,
    60, 98, 10, -98, 62, 85, 51, 117, -31, 38, 39, 0, 20,
    16, 15, 61, -1, 32, 1, -1, 15, 1, -124, 16, 0, 32,
    47, 15, 47, -32, 96, -14, -52, 79, 3, -62, 64, 0, 47,
    47, -17, 63, 15, 64, -10, -52, 47, -30, -26, 31, 0, 48,
    -86, 101, 58, 111, -1, 117, 51, 54, 116, 40, -13, 0, -14,
    0, 0, 16, 0, 16, 0, 0, 15, 0, 0, 16, 0, 0,
    79, 15, -97, -1, -128, -20, 85, 72, 4, -81, 0, 0, -64,
    47, -9, 44, -17, 111, -114, -52, 76, -113, -21, 43, 0, 47,
    63, -117, 63, 63, 127, -49, -1, 76, -1, -22, 63, 0, 62,
    63, -117, 63, 63, 111, 127, -1, 44, -1, -22, 79, 0, 61,
    85, -104, 53, -114, 47, 54, 51, 39, -27, 86, 9, 0, 27,
    47, -1, 41, -16, 80, -15, -69, 46, 1, -82, 47, 0, 48,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    62, -56, 46, -56, 95, 124, -69, 45, -35, -74, 27, 0, 109,
    63, 111, 47, -16, 47, 51, 34, 20, 63, -122, 16, 0, 32,
    47, 31, 63, -16, 64, -11, -1, 31, -14, 126, 40, 0, 22,
    119, 102, 34, 74, 63, 72, 50, -84, -10, 42, -1, 0, 115,
    48, 0, 32, 0, 80, 0, -1, 48, 10, 0, 31, 0, -81,
    31, -102, 111, -15, 32, 3, 85, 8, 1, -82, 0, 0, -32,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 15, -65,
    -85, -51, -81, -114, -1, -122, 102, -58, -7, 86, -102, 0, 4,
    47, 10, 64, -16, 112, -16, 0, 32, 0, 15, 111, 0, 126,
    26, 102, 34, 71, 62, 66, 34, 102, -126, 40, 6, 0, 41,
    30, -1, 47, 11, 47, -10, -1, 47, 1, -1, 47, 0, 32,
    31, -1, 16, 0, 64, 18, -1, 47, -14, 78, 64, 0, 15,
    47, -1, 47, 25, 95, -13, -1, 31, -14, -72, 63, 0, 79,
    60, 98, 10, -98, 62, 85, 51, 117, -31, 38, 39, 0, 20,
    16, 15, 61, -1, 32, 1, -1, 15, 1, -124, 16, 0, 32,
    47, 15, 47, -32, 96, -14, -52, 79, 3, -62, 64, 0, 47,
    47, -17, 63, 15, 64, -10, -52, 47, -30, -26, 31, 0, 48,
    -86, 101, 58, 111, -1, 117, 51, 54, 116, 40, -13, 0, -14,
    0, 0, 16, 0, 16, 0, 0, 15, 0, 0, 16, 0, 0,
    79, 15, -97, -1, -128, -20, 85, 72, 4, -81, 0, 0, -64,
    47, -9, 44, -17, 111, -114, -52, 76, -113, -21, 43, 0, 47,
    63, -117, 63, 63, 127, -49, -1, 76, -1, -22, 63, 0, 62,
    63, -117, 63, 63, 111, 127, -1, 44, -1, -22, 79, 0, 61,
    85, -104, 53, -114, 47, 54, 51, 39, -27, 86, 9, 0, 27,
    47, -1, 41, -16, 80, -15, -69, 46, 1, -82, 47, 0, 48,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    62, -56, 46, -56, 95, 124, -69, 45, -35, -74, 27, 0, 109,
    63, 111, 47, -16, 47, 51, 34, 20, 63, -122, 16, 0, 32,
    47, 31, 63, -16, 64, -11, -1, 31, -14, 126, 40, 0, 22,
    119, 102, 34, 74, 63, 72, 50, -84, -10, 42, -1, 0, 115,
    48, 0, 32, 0, 80, 0, -1, 48, 10, 0, 31, 0, -81,
    31, -102, 111, -15, 32, 3, 85, 8, 1, -82, 0, 0, -32,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 15, -65,
    -85, -51, -81, -114, -1, -122, 102, -58, -7, 86, -102, 0, 4,
    47, 10, 64, -16, 112, -16, 0, 32, 0, 15, 111, 0, 126,
];

/// Fallback pair matrix, consulted only when every other signal nets
/// to exactly zero.
pub const FALLBACK: [Weight; MATRIX_SIZE] = [
    37, 104, 108, 114, 34, -90, -120, 103, 106, 67, -104, 15, -122,
    64, 0, 32, 0, 96, 0, 0, 64, 0, 17, 80, 15, 48,
    64, 0, 32, 2, 96, -48, 0, 48, 0, 1, -112, 15, 32,
    64, 1, 80, 1, -95, 0, 0, 64, 0, 16, 96, 15, 48,
    19, 114, 38, 98, 18, -121, -120, 89, 42, 70, -88, 15, 72,
    48, 0, 34, 0, 112, 0, 0, 32, 0, -118, 64, 15, 0,
    96, 0, 32, 2, 96, 0, 0, 80, 0, 32, 80, 15, 32,
    64, 0, 64, 0, 96, 1, 17, 96, 0, 38, 64, 15, 96,
    54, 37, 21, -127, 16, 88, 102, 24, 88, 67, 21, 15, 6,
    64, 0, 32, 0, 16, 0, 0, 32, 0, 0, -128, 15, 0,
    -128, 0, 16, 1, 96, 0, 0, 96, 0, 0, 80, 15, 32,
    80, 22, 34, 16, 96, 113, 34, 99, 0, 18, 114, 15, 32,
    81, 34, 48, 16, 96, -128, 0, 83, 0, 17, -112, 15, 33,
    81, 34, 48, 80, 96, -128, 0, 83, 0, 17, 112, 15, 33,
    41, 86, 104, 97, 48, -120, 102, 54, 22, 117, 22, 15, -89,
    80, 0, 32, 3, 112, 0, 0, 96, 0, 17, 64, 15, 96,
    0, 0, 0, 0, -128, 0, 0, 0, 0, 0, 0, 15, 0,
    97, 19, 82, 32, 112, 99, 34, 98, 0, 39, 99, 15, 16,
    80, 0, 32, 6, 96, 48, 0, 97, 0, 22, 64, 15, 32,
    96, 0, 16, 7, 64, 0, 0, 96, 0, 1, 96, 15, 16,
    72, 85, 41, 114, 80, 85, 87, 68, 6, 68, 0, 15, 42,
    96, 0, 32, 0, 112, 0, 0, 96, 0, 0, 48, 15, 0,
    32, 5, 16, 0, 32, -53, -103, 24, 0, 96, 0, 15, 46,
    96, 0, 112, 0, -128, 0, 0, 96, 0, 0, 0, 15, -96,
    53, 34, 48, 32, 0, -122, -103, 102, 6, -108, -112, 15, 4,
    -96, 0, 16, 0, 96, 0, 0, -112, 0, 0, -128, 15, 97,
    37, 104, 108, 114, 34, -90, -120, 103, 106, 67, -104, 15, -122,
    64, 0, 32, 0, 96, 0, 0, 64, 0, 17, 80, 15, 48,
    64, 0, 32, 2, 96, -48, 0, 48, 0, 1, -112, 15, 32,
    64, 1, 80, 1, -95, 0, 0, 64, 0, 16, 96, 15, 48,
    19, 114, 38, 98, 18, -121, -120, 89, 42, 70, -88, 15, 72,
    48, 0, 34, 0, 112, 0, 0, 32, 0, -118, 64, 15, 0,
    96, 0, 32, 2, 96, 0, 0, 80, 0, 32, 80, 15, 32,
    64, 0, 64, 0, 96, 1, 17, 96, 0, 38, 64, 15, 96,
    54, 37, 21, -127, 16, 88, 102, 24, 88, 67, 21, 15, 6,
    64, 0, 32, 0, 16, 0, 0, 32, 0, 0, -128, 15, 0,
    -128, 0, 16, 1, 96, 0, 0, 96, 0, 0, 80, 15, 32,
    80, 22, 34, 16, 96, 113, 34, 99, 0, 18, 114, 15, 32,
    81, 34, 48, 16, 96, -128, 0, 83, 0, 17, -112, 15, 33,
    81, 34, 48, 80, 96, -128, 0, 83, 0, 17, 112, 15, 33,
    41, 86, 104, 97, 48, -120, 102, 54, 22, 117, 22, 15, -89,
    80, 0, 32, 3, 112, 0, 0, 96, 0, 17, 64, 15, 96,
    0, 0, 0, 0, -128, 0, 0, 0, 0, 0, 0, 15, 0,
    97, 19, 82, 32, 112, 99, 34, 98, 0, 39, 99, 15, 16,
    80, 0, 32, 6, 96, 48, 0, 97, 0, 22, 64, 15, 32,
    96, 0, 16, 7, 64, 0, 0, 96, 0, 1, 96, 15, 16,
    72, 85, 41, 114, 80, 85, 87, 68, 6, 68, 0, 15, 42,
    96, 0, 32, 0, 112, 0, 0, 96, 0, 0, 48, 15, 0,
    32, 5, 16, 0, 32, -53, -103, 24, 0, 96, 0, 15, 46,
    96, 0, 112, 0, -128, 0, 0, 96, 0, 0, 0, 15, -96,
    53, 34, 48, 32, 0, -122, -103, 102, 6, -108, -112, 15, 4,
    -96, 0, 16, 0, 96, 0, 0, -112, 0, 0, -128, 15, 97,
];

/// Suffix index: byte offset of each letter's record list in
/// [`SUFFIX_BLOB`], 0 = no entries. The blob's first byte is a reserved
/// terminator so that offset 0 can never address a record.
pub const SUFFIX_INDEX: [u16; 26] = [
    1, 0, 23, 32, 37, 57, 0, 62, 68, 0, 0, 101, 115, 126, 132, 0, 0, 0, 146, 162, 0, 0, 176, 0, 0, 0,
];

/// Suffix records: `(flags << 6) | length` header byte followed by the
/// pattern bytes; a zero header terminates each letter's list.
pub const SUFFIX_BLOB: &[u8] = &[
    0x00, 0x84, 0x61, 0x62, 0x6c, 0x65, 0x84, 0x61, 0x6e, 0x63, 0x65, 0x83,
    0x61, 0x6e, 0x74, 0x83, 0x61, 0x67, 0x65, 0x82, 0x61, 0x6c, 0x00, 0x84,
    0x63, 0x69, 0x61, 0x6c, 0x02, 0x63, 0x79, 0x00, 0x83, 0x64, 0x6f, 0x6d,
    0x00, 0x84, 0x65, 0x6e, 0x63, 0x65, 0x83, 0x65, 0x6e, 0x74, 0x83, 0x65,
    0x73, 0x74, 0x82, 0x65, 0x72, 0x02, 0x65, 0x64, 0x00, 0xc3, 0x66, 0x75,
    0x6c, 0x00, 0xc4, 0x68, 0x6f, 0x6f, 0x64, 0x00, 0x84, 0x69, 0x62, 0x6c,
    0x65, 0xc3, 0x69, 0x6e, 0x67, 0x83, 0x69, 0x6f, 0x6e, 0x83, 0x69, 0x73,
    0x68, 0x83, 0x69, 0x74, 0x79, 0x83, 0x69, 0x76, 0x65, 0x83, 0x69, 0x7a,
    0x65, 0x02, 0x69, 0x63, 0x00, 0xc4, 0x6c, 0x65, 0x73, 0x73, 0x84, 0x6c,
    0x69, 0x6b, 0x65, 0x82, 0x6c, 0x79, 0x00, 0xc4, 0x6d, 0x65, 0x6e, 0x74,
    0x84, 0x6d, 0x6f, 0x73, 0x74, 0x00, 0xc4, 0x6e, 0x65, 0x73, 0x73, 0x00,
    0x85, 0x6f, 0x6c, 0x6f, 0x67, 0x79, 0x83, 0x6f, 0x75, 0x73, 0x02, 0x6f,
    0x72, 0x00, 0xc4, 0x73, 0x68, 0x69, 0x70, 0x84, 0x73, 0x69, 0x6f, 0x6e,
    0x84, 0x73, 0x6f, 0x6d, 0x65, 0x00, 0xc4, 0x74, 0x69, 0x6f, 0x6e, 0x84,
    0x74, 0x69, 0x76, 0x65, 0x02, 0x74, 0x79, 0x00, 0x84, 0x77, 0x61, 0x72,
    0x64, 0x84, 0x77, 0x69, 0x73, 0x65, 0x00,
];
