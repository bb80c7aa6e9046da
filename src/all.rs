// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! A list of all supported encodings. Useful for encodings fixed in the compile time.

use crate::codec;
use crate::codec::doublebyte::DoubleByteEncoding;
use crate::codec::singlebyte::{tables, SingleByteEncoding};
use crate::types::EncodingRef;

macro_rules! singlebyte(
    ($(var=$var:ident, name=$name:expr;)*) => ($(
        pub static $var: SingleByteEncoding = SingleByteEncoding::new($name, &tables::$var);
    )*)
);

macro_rules! doublebyte(
    ($(var=$var:ident, table=$table:path, name=$name:expr;)*) => ($(
        pub static $var: DoubleByteEncoding = DoubleByteEncoding::new($name, &$table);
    )*)
);

pub static ASCII: codec::ascii::ASCIIEncoding = codec::ascii::ASCIIEncoding;

singlebyte! {
    var=ISO_8859_1, name="iso-8859-1";
    var=IBM866, name="ibm866";
    var=ISO_8859_2, name="iso-8859-2";
    var=ISO_8859_3, name="iso-8859-3";
    var=ISO_8859_4, name="iso-8859-4";
    var=ISO_8859_5, name="iso-8859-5";
    var=ISO_8859_6, name="iso-8859-6";
    var=ISO_8859_7, name="iso-8859-7";
    var=ISO_8859_8, name="iso-8859-8";
    var=ISO_8859_10, name="iso-8859-10";
    var=ISO_8859_13, name="iso-8859-13";
    var=ISO_8859_14, name="iso-8859-14";
    var=ISO_8859_15, name="iso-8859-15";
    var=ISO_8859_16, name="iso-8859-16";
    var=KOI8_R, name="koi8-r";
    var=KOI8_U, name="koi8-u";
    var=MACINTOSH, name="macintosh";
    var=X_MAC_CYRILLIC, name="x-mac-cyrillic";
    var=WINDOWS_874, name="windows-874";
    var=WINDOWS_1250, name="windows-1250";
    var=WINDOWS_1251, name="windows-1251";
    var=WINDOWS_1252, name="windows-1252";
    var=WINDOWS_1253, name="windows-1253";
    var=WINDOWS_1254, name="windows-1254";
    var=WINDOWS_1255, name="windows-1255";
    var=WINDOWS_1256, name="windows-1256";
    var=WINDOWS_1257, name="windows-1257";
    var=WINDOWS_1258, name="windows-1258";
    var=IBM037, name="ibm037";
    var=IBM500, name="ibm500";
}

doublebyte! {
    var=SHIFT_JIS, table=codec::japanese::SHIFT_JIS_TABLE, name="shift_jis";
    var=WINDOWS_31J, table=codec::japanese::WINDOWS_31J_TABLE, name="windows-31j";
    var=EUC_KR, table=codec::korean::EUC_KR_TABLE, name="euc-kr";
    var=WINDOWS_949, table=codec::korean::WINDOWS_949_TABLE, name="windows-949";
    var=GB2312, table=codec::simpchinese::GB2312_TABLE, name="gb2312";
    var=GBK, table=codec::simpchinese::GBK_TABLE, name="gbk";
    var=BIG5, table=codec::tradchinese::BIG5_TABLE, name="big5";
    var=BIG5_HKSCS, table=codec::tradchinese::BIG5_HKSCS_TABLE, name="big5-hkscs";
}

/// EUC-JP with JIS X 0212 in the G3 plane.
pub static EUC_JP: DoubleByteEncoding =
    DoubleByteEncoding::new("euc-jp", &codec::japanese::EUC_JP_TABLE)
        .with_g3(&codec::japanese::JIS0212_TABLE);

pub use crate::codec::japanese::{ISO_2022_JP, ISO_2022_JP_2};
pub use crate::codec::korean::ISO_2022_KR;
pub use crate::codec::simpchinese::ISO_2022_CN_GB;

pub static JIS_AUTODETECT: codec::autodetect::JisAutodetectEncoding =
    codec::autodetect::JisAutodetectEncoding;

static ENCODINGS: [EncodingRef; 45] = [
    &ASCII,
    &ISO_8859_1,
    &IBM866,
    &ISO_8859_2,
    &ISO_8859_3,
    &ISO_8859_4,
    &ISO_8859_5,
    &ISO_8859_6,
    &ISO_8859_7,
    &ISO_8859_8,
    &ISO_8859_10,
    &ISO_8859_13,
    &ISO_8859_14,
    &ISO_8859_15,
    &ISO_8859_16,
    &KOI8_R,
    &KOI8_U,
    &MACINTOSH,
    &X_MAC_CYRILLIC,
    &WINDOWS_874,
    &WINDOWS_1250,
    &WINDOWS_1251,
    &WINDOWS_1252,
    &WINDOWS_1253,
    &WINDOWS_1254,
    &WINDOWS_1255,
    &WINDOWS_1256,
    &WINDOWS_1257,
    &WINDOWS_1258,
    &IBM037,
    &IBM500,
    &SHIFT_JIS,
    &WINDOWS_31J,
    &EUC_JP,
    &EUC_KR,
    &WINDOWS_949,
    &GB2312,
    &GBK,
    &BIG5,
    &BIG5_HKSCS,
    &ISO_2022_JP,
    &ISO_2022_JP_2,
    &ISO_2022_KR,
    &ISO_2022_CN_GB,
    &JIS_AUTODETECT,
];

/// Returns a list of references to the encodings available.
pub fn encodings() -> &'static [EncodingRef] {
    &ENCODINGS
}
