//! The predefined standard SAM tags.
//!
//! Transcribed from the SAMtags specification:
//! https://samtools.github.io/hts-specs/SAMtags.pdf
//!
//! Reserved tags are kept for backwards compatibility and have no value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SamTagError};

/// SAM optional-field value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// `A`: printable character.
    #[serde(rename = "A")]
    Char,
    /// `i`: signed integer.
    #[serde(rename = "i")]
    Int,
    /// `f`: single-precision float.
    #[serde(rename = "f")]
    Float,
    /// `Z`: printable string.
    #[serde(rename = "Z")]
    String,
    /// `H`: byte array in hex format.
    #[serde(rename = "H")]
    Hex,
    /// `B`: integer or numeric array.
    #[serde(rename = "B")]
    Array,
}

impl ValueType {
    /// The single-character type code used in SAM text.
    pub fn code(&self) -> char {
        match self {
            ValueType::Char => 'A',
            ValueType::Int => 'i',
            ValueType::Float => 'f',
            ValueType::String => 'Z',
            ValueType::Hex => 'H',
            ValueType::Array => 'B',
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A tag predefined by the SAMtags specification.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StandardTag {
    AM,
    AS,
    BC,
    BQ,
    BZ,
    CB,
    CC,
    CG,
    CM,
    CO,
    CP,
    CQ,
    CR,
    CS,
    CT,
    CY,
    E2,
    FI,
    FS,
    FZ,
    GC,
    GQ,
    GS,
    H0,
    H1,
    H2,
    HI,
    IH,
    LB,
    MC,
    MD,
    MF,
    MI,
    ML,
    MM,
    MQ,
    NH,
    NM,
    OA,
    OC,
    OP,
    OQ,
    OX,
    PG,
    PQ,
    PT,
    PU,
    Q2,
    QT,
    QX,
    R2,
    RG,
    RT,
    RX,
    S2,
    SA,
    SM,
    SQ,
    TC,
    TS,
    U2,
    UQ,
}

impl StandardTag {
    /// Every standard tag, sorted by code.
    pub const ALL: [StandardTag; 62] = [
        StandardTag::AM,
        StandardTag::AS,
        StandardTag::BC,
        StandardTag::BQ,
        StandardTag::BZ,
        StandardTag::CB,
        StandardTag::CC,
        StandardTag::CG,
        StandardTag::CM,
        StandardTag::CO,
        StandardTag::CP,
        StandardTag::CQ,
        StandardTag::CR,
        StandardTag::CS,
        StandardTag::CT,
        StandardTag::CY,
        StandardTag::E2,
        StandardTag::FI,
        StandardTag::FS,
        StandardTag::FZ,
        StandardTag::GC,
        StandardTag::GQ,
        StandardTag::GS,
        StandardTag::H0,
        StandardTag::H1,
        StandardTag::H2,
        StandardTag::HI,
        StandardTag::IH,
        StandardTag::LB,
        StandardTag::MC,
        StandardTag::MD,
        StandardTag::MF,
        StandardTag::MI,
        StandardTag::ML,
        StandardTag::MM,
        StandardTag::MQ,
        StandardTag::NH,
        StandardTag::NM,
        StandardTag::OA,
        StandardTag::OC,
        StandardTag::OP,
        StandardTag::OQ,
        StandardTag::OX,
        StandardTag::PG,
        StandardTag::PQ,
        StandardTag::PT,
        StandardTag::PU,
        StandardTag::Q2,
        StandardTag::QT,
        StandardTag::QX,
        StandardTag::R2,
        StandardTag::RG,
        StandardTag::RT,
        StandardTag::RX,
        StandardTag::S2,
        StandardTag::SA,
        StandardTag::SM,
        StandardTag::SQ,
        StandardTag::TC,
        StandardTag::TS,
        StandardTag::U2,
        StandardTag::UQ,
    ];

    /// Look up a standard tag by its code. Matching is case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.code() == code)
    }

    /// The two-character code.
    pub fn code(&self) -> &'static str {
        self.entry().code
    }

    /// The value type declared for this tag, or `None` for reserved tags.
    pub fn value_type(&self) -> Option<ValueType> {
        self.entry().value_type
    }

    /// One-line description.
    pub fn summary(&self) -> &'static str {
        self.entry().summary
    }

    /// The tag's format line, e.g. `AS:i:score`, or `None` for reserved tags.
    pub fn format(&self) -> Option<&'static str> {
        self.entry().format
    }

    /// Full description from the SAMtags specification.
    pub fn details(&self) -> &'static str {
        self.entry().details
    }

    /// True if the tag is only reserved for backwards compatibility.
    pub fn is_reserved(&self) -> bool {
        self.value_type().is_none()
    }

    fn entry(&self) -> Entry {
        match self {
            StandardTag::AM => Entry {
                code: "AM",
                value_type: Some(ValueType::Int),
                summary: "The smallest template-independent mapping quality in the template.",
                format: Some("AM:i:score"),
                details: "The smallest template-independent mapping quality of any segment in the \
                    same template as this read. (See also `SM`.)",
            },
            StandardTag::AS => Entry {
                code: "AS",
                value_type: Some(ValueType::Int),
                summary: "Alignment score generated by aligner.",
                format: Some("AS:i:score"),
                details: "Alignment score generated by aligner.",
            },
            StandardTag::BC => Entry {
                code: "BC",
                value_type: Some(ValueType::String),
                summary: "Barcode sequence identifying the sample.",
                format: Some("BC:Z:sequence"),
                details: "Barcode sequence (Identifying the sample/library), with any quality \
                    scores (optionally) stored in the `QT` tag. The `BC` tag should match the `QT` \
                    tag in length. In the case of multiple unique molecular identifiers (e.g., one \
                    on each end of the template) the recommended implementation con- catenates all \
                    the barcodes and places a hyphen ('-') between the barcodes from the same \
                    template.",
            },
            StandardTag::BQ => Entry {
                code: "BQ",
                value_type: Some(ValueType::String),
                summary: "Offset to base alignment quality (BAQ).",
                format: Some("BQ:Z:qualities"),
                details: "Offset to base alignment quality (BAQ), of the same length as the read \
                    sequence. At the i-th read base, BAQ_i = Q_i − (BQ_i − 64) where Q_i is the \
                    i-th base quality.",
            },
            StandardTag::BZ => Entry {
                code: "BZ",
                value_type: Some(ValueType::String),
                summary: "Phred quality of the unique molecular barcode bases in the OX tag.",
                format: Some("BZ:Z:qualities+"),
                details: "Phred quality of the (uncorrected) unique molecular identifier sequence \
                    in the `OX` tag. Same encoding as QUAL, i.e., Phred score + 33. The `OX` tags \
                    should match the `BZ` tag in length. In the case of multiple unique molecular \
                    identifiers (e.g., one on each end of the template) the recommended \
                    implementation concatenates all the quality strings with a space (' ') between \
                    the different strings.",
            },
            StandardTag::CB => Entry {
                code: "CB",
                value_type: Some(ValueType::String),
                summary: "Cell identifier.",
                format: Some("CB:Z:str"),
                details: "Cell identifier, consisting of the optionally-corrected cellular barcode \
                    sequence and an optional suffix. The sequence part is similar to the `CR` tag, \
                    but may have had sequencing errors etc corrected.  This may be followed by a \
                    suffix consisting of a hyphen ('-') and one or more alphanumeric characters to \
                    form an identifier. In the case of the cellular barcode (CR) being based on \
                    multiple barcode sequences the recommended implementation concatenates all the \
                    (corrected or uncorrected) barcodes with a hyphen ('-') between the different \
                    barcodes. Sequencing errors etc aside, all reads from a single cell are \
                    expected to have the same CB tag.",
            },
            StandardTag::CC => Entry {
                code: "CC",
                value_type: Some(ValueType::String),
                summary: "Reference name of the next hit.",
                format: Some("CC:Z:rname"),
                details: "Reference name of the next hit; '=' for the same chromosome.",
            },
            StandardTag::CG => Entry {
                code: "CG",
                value_type: Some(ValueType::Array),
                summary: "BAM only: CIGAR in BAM's binary encoding if (and only if) it consists of \
                    >65535 operators.",
                format: Some("CG:B:I,encodedCigar"),
                details: "Real CIGAR in its binary form if (and only if) it contains >65535 \
                    operations. This is a BAM file only tag as a workaround of BAM's incapability \
                    to store long CIGARs in the standard way. SAM and CRAM files created with \
                    updated tools aware of the workaround are not expected to contain this tag. \
                    See also the footnote in Section 4.2 of the SAM spec for details.",
            },
            StandardTag::CM => Entry {
                code: "CM",
                value_type: Some(ValueType::Int),
                summary: "Edit distance between the color sequence and the color reference (see \
                    also NM).",
                format: Some("CM:i:distance"),
                details: "Edit distance between the color sequence and the color reference (see \
                    also `NM`).",
            },
            StandardTag::CO => Entry {
                code: "CO",
                value_type: Some(ValueType::String),
                summary: "Free-text comments.",
                format: Some("CO:Z:text"),
                details: "Free-text comments.",
            },
            StandardTag::CP => Entry {
                code: "CP",
                value_type: Some(ValueType::Int),
                summary: "Leftmost coordinate of the next hit.",
                format: Some("CP:i:pos"),
                details: "Leftmost coordinate of the next hit.",
            },
            StandardTag::CQ => Entry {
                code: "CQ",
                value_type: Some(ValueType::String),
                summary: "Color read base qualities.",
                format: Some("CQ:Z:qualities"),
                details: "Color read quality on the original strand of the read. Same encoding as \
                    QUAL; same length as `CS`.",
            },
            StandardTag::CR => Entry {
                code: "CR",
                value_type: Some(ValueType::String),
                summary: "Cellular barcode sequence bases (uncorrected).",
                format: Some("CR:Z:sequence+"),
                details: "Cellular barcode. The uncorrected sequence bases of the cellular barcode \
                    as reported by the sequencing machine, with the corresponding base quality \
                    scores (optionally) stored in `CY`. Sequencing errors etc aside, all reads \
                    with the same `CR` tag likely derive from the same cell. In the case of the \
                    cellular barcode being based on multiple barcode sequences the recommended \
                    implementation concatenates all the barcodes with a hyphen ('-') between the \
                    different barcodes.",
            },
            StandardTag::CS => Entry {
                code: "CS",
                value_type: Some(ValueType::String),
                summary: "Color read sequence.",
                format: Some("CS:Z:sequence"),
                details: "Color read sequence on the original strand of the read. The primer base \
                    must be included.",
            },
            StandardTag::CT => Entry {
                code: "CT",
                value_type: Some(ValueType::String),
                summary: "Complete read annotation tag, used for consensus annotation dummy \
                    features.",
                format: Some("CT:Z:strand;type(;key(=value)?)*"),
                details: "Complete read annotation tag, used for consensus annotation dummy \
                    features.\n\nThe `CT` tag is intended primarily for annotation dummy reads, \
                    and consists of a _strand_, _type_ and zero or more _key_=_value_ pairs, each \
                    separated with semicolons. The _strand_ field has four values as in GFF3, and \
                    supplements FLAG bit 0x10 to allow unstranded ('.'), and stranded but unknown \
                    strand ('?') annotation. For these and annotation on the forward strand \
                    (_strand_ set to '+'), do not set FLAG bit 0x10. For annotation on the reverse \
                    strand, set the _strand_ to '-' and set FLAG bit 0x10.\n\nThe _type_ and any \
                    _keys_ and their optional _values_ are all percent encoded according to \
                    RFC3986 to escape meta-characters '=', '%', ';', '|' or non-printable \
                    characters not matched by the isprint() macro (with the C locale). For example \
                    a percent sign becomes '`%25`'.",
            },
            StandardTag::CY => Entry {
                code: "CY",
                value_type: Some(ValueType::String),
                summary: "Phred quality of the cellular barcode sequence in the CR tag.",
                format: Some("CY:Z:qualities+"),
                details: "Phred quality of the cellular barcode sequence in the `CR` tag. Same \
                    encoding as QUAL, i.e., Phred score + 33. The lengths of the `CY` and `CR` \
                    tags must match. In the case of the cellular barcode being based on multiple \
                    barcode sequences the recommended implementation concatenates all the quality \
                    strings with with spaces (' ') between the different strings.",
            },
            StandardTag::E2 => Entry {
                code: "E2",
                value_type: Some(ValueType::String),
                summary: "The 2nd most likely base calls.",
                format: Some("E2:Z:bases"),
                details: "The 2nd most likely base calls. Same encoding and same length as SEQ. \
                    See also `U2` for associated quality values.",
            },
            StandardTag::FI => Entry {
                code: "FI",
                value_type: Some(ValueType::Int),
                summary: "The index of segment in the template.",
                format: Some("FI:i:int"),
                details: "The index of segment in the template.",
            },
            StandardTag::FS => Entry {
                code: "FS",
                value_type: Some(ValueType::String),
                summary: "Segment suffix.",
                format: Some("FS:Z:str"),
                details: "Segment suffix.",
            },
            StandardTag::FZ => Entry {
                code: "FZ",
                value_type: Some(ValueType::Array),
                summary: "Flow signal intensities.",
                format: Some("FZ:B:S,intensities"),
                details: "Flow signal intensities on the original strand of the read, stored as \
                    `(uint16 t) round(value * 100.0)`.",
            },
            StandardTag::GC => Entry {
                code: "GC",
                value_type: None,
                summary: "Reserved for backwards compatibility reasons.",
                format: None,
                details: "Reserved for backwards compatibility reasons.",
            },
            StandardTag::GQ => Entry {
                code: "GQ",
                value_type: None,
                summary: "Reserved for backwards compatibility reasons.",
                format: None,
                details: "Reserved for backwards compatibility reasons.",
            },
            StandardTag::GS => Entry {
                code: "GS",
                value_type: None,
                summary: "Reserved for backwards compatibility reasons.",
                format: None,
                details: "Reserved for backwards compatibility reasons.",
            },
            StandardTag::H0 => Entry {
                code: "H0",
                value_type: Some(ValueType::Int),
                summary: "Number of perfect hits.",
                format: Some("H0:i:count"),
                details: "Number of perfect hits.",
            },
            StandardTag::H1 => Entry {
                code: "H1",
                value_type: Some(ValueType::Int),
                summary: "Number of 1-difference hits (see also NM).",
                format: Some("H1:i:count"),
                details: "Number of 1-difference hits (see also `NM`).",
            },
            StandardTag::H2 => Entry {
                code: "H2",
                value_type: Some(ValueType::Int),
                summary: "Number of 2-difference hits.",
                format: Some("H2:i:count"),
                details: "Number of 2-difference hits.",
            },
            StandardTag::HI => Entry {
                code: "HI",
                value_type: Some(ValueType::Int),
                summary: "Query hit index.",
                format: Some("HI:i:i"),
                details: "Query hit index, indicating the alignment record is the i-th one stored \
                    in SAM.",
            },
            StandardTag::IH => Entry {
                code: "IH",
                value_type: Some(ValueType::Int),
                summary: "Query hit total count.",
                format: Some("IH:i:count"),
                details: "Number of alignments stored in the file that contain the query in the \
                    current record.",
            },
            StandardTag::LB => Entry {
                code: "LB",
                value_type: Some(ValueType::String),
                summary: "Library.",
                format: Some("LB:Z:library"),
                details: "The library from which the read has been sequenced. If `@RG` headers are \
                    present, then _library_ must match the `RG-LB` field of one of the headers.",
            },
            StandardTag::MC => Entry {
                code: "MC",
                value_type: Some(ValueType::String),
                summary: "CIGAR string for mate/next segment.",
                format: Some("MC:Z:cigar"),
                details: "CIGAR string for mate/next segment.",
            },
            StandardTag::MD => Entry {
                code: "MD",
                value_type: Some(ValueType::String),
                summary: "String encoding mismatched and deleted reference bases.",
                format: Some("MD:Z:[0-9]+(([A-Z]|\\^[A-Z]+)[0-9]+)*"),
                details: "String encoding mismatched and deleted reference bases, used in \
                    conjunction with the CIGAR and SEQ fields to reconstruct the bases of the \
                    reference sequence interval to which the alignment has been mapped. This can \
                    enable variant calling without requiring access to the entire original \
                    reference.\n\nThe MD string consists of the following items, concatenated \
                    without additional delimiter characters:\n* [0-9]+, indicating a run of \
                    reference bases that are identical to the corresponding SEQ bases;\n* [A-Z], \
                    identifying a single reference base that differs from the SEQ base aligned at \
                    that position;\n* \\^[A-Z]+, identifying a run of reference bases that have \
                    been deleted in the alignment.\n\nAs shown in the complete regular expression \
                    above, numbers alternate with the other items. Thus if two mismatches or \
                    deletions are adjacent without a run of identical bases between them, a '0' \
                    (indicating a 0-length run) must be used to separate them in the MD \
                    string.\n\nClipping, padding, reference skips, and insertions ('H', 'S', 'P', \
                    'N', and 'I' CIGAR operations) are not represented in the MD string. When \
                    reconstructing the reference sequence, inserted and soft-clipped SEQ bases are \
                    omitted as determined by tracking 'I' and 'S' operations in the CIGAR string. \
                    (If the CIGAR string contains 'N' operations, then the corresponding skipped \
                    parts of the reference sequence cannot be reconstructed.)\n\nFor example, a \
                    string '10A5^AC6' means from the leftmost reference base in the alignment, \
                    there are 10 matches followed by an A on the reference which is different from \
                    the aligned read base; the next 5 reference bases are matches followed by a \
                    2bp deletion from the reference; the deleted sequence is AC; the last 6 bases \
                    are matches.",
            },
            StandardTag::MF => Entry {
                code: "MF",
                value_type: None,
                summary: "Reserved for backwards compatibility reasons.",
                format: None,
                details: "Reserved for backwards compatibility reasons.",
            },
            StandardTag::MI => Entry {
                code: "MI",
                value_type: Some(ValueType::String),
                summary: "Molecular identifier; a string that uniquely identifies the molecule \
                    from which the record was derived.",
                format: Some("MI:Z:str"),
                details: "Molecular Identifier. A unique ID within the SAM file for the source \
                    molecule from which this read is derived. All reads with the same `MI` tag \
                    represent the group of reads derived from the same source molecule.",
            },
            StandardTag::ML => Entry {
                code: "ML",
                value_type: Some(ValueType::Array),
                summary: "Base modification probabilities.",
                format: Some("ML:B:C,scaled-probabilities"),
                details: "The optional `ML` tag lists the probability of each modification listed \
                    in the `MM` tag being correct, in the order that they occur. The continuous \
                    probability range 0.0 to 1.0 is remapped in equal sized portions to the \
                    discrete integers 0 to 255 inclusively. Thus the probability range \
                    corresponding to integer value _N_ is _N_/256 to (_N_ + 1)/256.\n\nThe SAM \
                    encoding therefore uses a byte array of type '`C`' with the number of elements \
                    matching the summation of the number of modifications listed as being present \
                    in the `MM` tag accounting for multi-modifications each having their own \
                    probability.\n\nFor example '`MM:Z:C+m,5,12;C+h,5,12;`' may have an associated \
                    tag of '`ML:B:C,204,89,26,130`'.\n\nIf the above is rewritten in the \
                    multiple-modification form, the probabilities are interleaved in the order \
                    presented, giving '`MM:Z:C+mh,5,12; ML:B:C,204,26,89,130`'. Note where several \
                    possible modifications are presented at the same site, the `ML` values \
                    represent the absolute probabilities of the modification call being correct \
                    and not the relative likelihood between the alternatives. These probabilities \
                    should not sum to above 1.0 (≈ 256 in integer encoding, allowing for some \
                    minor rounding errors), but may sum to a lower total with the remainder \
                    representing the probability that none of the listed modification types are \
                    present. In the example used above, the 6th `C` has 80% chance of being `5mC`, \
                    10% chance of being `5hmC` and 10% chance of being an unmodified `C`.\n\n`ML` \
                    values for ambiguity codes give the probability that the modification is one \
                    of the possible codes compatible with that ambiguity code. For example \
                    `MM:Z:C+C,10; ML:B:C,229` indicates a `C` call with a probability of 90% of \
                    having some form of unspecified modification.",
            },
            StandardTag::MM => Entry {
                code: "MM",
                value_type: Some(ValueType::String),
                summary: "Base modifications / methylation.",
                format: Some("MM:Z:([ACGTUN][-+]([a-z]+|[0-9]+)[.?]?(,[0-9]+)*;)*"),
                details: "The first character is the unmodified \"fundamental\" base as reported \
                    by the sequencing instrument for the top strand. It must be one of '`A`', \
                    '`C`', '`G`', '`T`', '`U`' (if RNA) or '`N`' for anything else, including any \
                    IUPAC ambiguity codes in the reported SEQ field. Note '`N`' may be used to \
                    match any base rather than specifically an '`N`' call by the sequencing \
                    instrument. This may be used in situations where the base modification is not \
                    a derivation of a standard base type. This is followed by either plus or minus \
                    indicating the strand the modification was observed on (relative to the \
                    original sequenced strand of SEQ with plus meaning same orientation), and one \
                    or more base modification codes.\n\nFollowing the base modification codes is a \
                    recommended but optional '`.`' or '`?`' describing how skipped seq bases of \
                    the stated base type should be interpreted by downstream tools. When this flag \
                    is '`?`' there is no information about the modification status of the skipped \
                    bases provided.  When this flag is not present, or it is '`.`', these bases \
                    should be assumed to have low probability of modification.\n\nThis is then \
                    followed by a comma separated list of how many seq bases of the stated base \
                    type to skip, stored as a delta to the last and starting with 0 as the first \
                    (or next) base, starting from the uncomplemented 5' end of the SEQ field. This \
                    number series is comparable to the numbers in an `MD` tag, albeit counting \
                    specific base types only and potentially reverse-complemented.\n\nFor example \
                    '`C+m,5,12,0;`' tells us there are three potential 5-Methylcytosine bases on \
                    the top strand of SEQ. The first 5 '`C`' bases are unmodified and the 6th, \
                    19th and 20th have modification status indicated by the corresponding \
                    probabilities in the `ML` tag. The 12 cytosines between the 6th and 19th \
                    cytosine are unmodified. Modification probabilities for the 17 skipped \
                    cytosines are not provided.\n\nWhen the '`?`' flag is present the tag \
                    '`C+m?,5,12,0;`' tells us the modification status of the first five cytosine \
                    bases is unknown, the sixth cytosine is called (as either modified or \
                    unmodified), followed by 12 more unknown cytosines, and the 19th and 20th are \
                    called.\n\nSimilarly '`G-m,14;`' indicates the 15th '`G`' there might be a \
                    5-Methylcytosine on the opposite strand (still counting using the top strand \
                    base calls from the 5' end). When the alignment record is reverse complemented \
                    (SAM flag 0x10) these two examples do not change since the tag always refers \
                    to the as-sequenced orientation. See the `test/SAMtags/MM-orient.sam` file for \
                    examples.\n\nThis permits modifications to be listed on either strand with the \
                    rare potential for both strands to have a modification at the same site. If \
                    SAM FLAG 0x10 is set, indicating that SEQ has been reverse complemented from \
                    the sequence observed by the sequencing machine, note that these base \
                    modification field values will be in the opposite orientation to SEQ and other \
                    derived SAM fields.\n\nNote it is permitted for the coordinate list to be \
                    empty (for example '`MM:Z:C+m;`'), which may be used as an explicit indicator \
                    that this base modification is not present. It is not permitted for \
                    coordinates to be beyond the length of the sequence.\n\nWhen multiple \
                    modifications are listed, for example '`C+mh,5,12,0;`', it indicates the \
                    modification may be any of the stated bases. The associated confidence values \
                    in the `ML` tag may be used to determine the relative likelihoods between the \
                    options. The example above is equivalent to '`C+m,5,12,0;C+h,5,12,0;`', \
                    although this will have a different ordering of confidence values in `ML`. \
                    Note ChEBI codes cannot be used in the multi-modification form (such as the \
                    '`C+mh`' example above).\n\nIf the modification is not one of the standard \
                    common types (listed below) it can be specified as a numeric ChEBI code. For \
                    example '`C+76792,57;`' is the same as '`C+h,57;`'.\n\nAn unmodified base of \
                    '`N`' means count any base in SEQ, not only those of '`N`'. Thus '`N+n,100;`' \
                    means the 101st base is Xanthosine (n), irrespective of the sequence \
                    composition.\n\nThe standard code types and their associated ChEBI values are \
                    listed below, taken from [Viner et \
                    al.](https://www.biorxiv.org/content/10.1101/043794v1). Additionally ambiguity \
                    codes '`A`', '`C`', '`G`', '`T`' and '`U`' exist to represent unspecified \
                    modifications bases of their respective canonical base types, plus code '`N`' \
                    to represent an unspecified modification of any base type.\n\n|**Unmodified \
                    base**|**Code**|**Abbreviation**|**Name** \
                    |**ChEBI**|\n|:---|:---|:---|:---|:---|\n|C \
                    |m |5mC |5-Methylcytosine |27551 |\n|C |h |5hmC |5-Hydroxymethylcytosine \
                    |76792 |\n|C |f |5fC |5-Formylcytosine |76794 |\n|C |c |5caC \
                    |5-Carboxylcytosine |76793 |\n|C |C | |Ambiguity code; any C mod | |\n|T |g \
                    |5hmU |5-Hydroxymethyluracil |16964 |\n|T |e |5fU |5-Formyluracil |80961 |\n|T \
                    |b |5caU |5-Carboxyluracil |17477 |\n|T |T | |Ambiguity code; any T mod | \
                    |\n|U |U | |Ambiguity code; any U mod | |\n|A |a |6mA |6-Methyladenine |28871 \
                    |\n|A |A | |Ambiguity code; any A mod | |\n|G |o |8oxoG |8-Oxoguanine |44605 \
                    |\n|G |G | |Ambiguity code; any G mod | |\n|N |n |Xao |Xanthosine |18107 |\n|N \
                    |N | |Ambiguity code; any mod | |",
            },
            StandardTag::MQ => Entry {
                code: "MQ",
                value_type: Some(ValueType::Int),
                summary: "Mapping quality of the mate/next segment.",
                format: Some("MQ:i:score"),
                details: "Mapping quality of the mate/next segment.",
            },
            StandardTag::NH => Entry {
                code: "NH",
                value_type: Some(ValueType::Int),
                summary: "Number of reported alignments that contain the query in the current \
                    record.",
                format: Some("NH:i:count"),
                details: "Number of reported alignments that contain the query in the current \
                    record.",
            },
            StandardTag::NM => Entry {
                code: "NM",
                value_type: Some(ValueType::Int),
                summary: "Edit distance to the reference.",
                format: Some("NM:i:count"),
                details: "Number of differences (mismatches plus inserted and deleted bases) \
                    between the sequence and reference, counting only (case-insensitive) A, C, G \
                    and T bases in sequence and reference as potential matches, with everything \
                    else being a mismatch. Note this means that ambiguity codes in both sequence \
                    and reference that match each other, such as 'N' in both, or compatible codes \
                    such as 'A' and 'R', are still counted as mismatches. The special sequence \
                    base '=' will always be considered to be a match, even if the reference is \
                    ambiguous at that point. Alignment reference skips, padding, soft and hard \
                    clipping ('N', 'P', 'S' and 'H' CIGAR operations) do not count as mismatches, \
                    but insertions and deletions count as one mismatch per base.\n\nNote that \
                    historically this has been ill-defined and both data and tools exist that \
                    disagree with this definition.",
            },
            StandardTag::OA => Entry {
                code: "OA",
                value_type: Some(ValueType::String),
                summary: "Original alignment.",
                format: Some("OA:Z:(RNAME,POS,strand,CIGAR,MAPQ,NM;)+"),
                details: "The original alignment information of the record prior to realignment or \
                    unalignment by a subsequent tool. Each original alignment entry contains the \
                    following six field values from the original record, generally in their \
                    textual SAM representations, separated by commas (',') and terminated by a \
                    semicolon (';'): RNAME, which must be explicit (unlike RNEXT, '=' may not be \
                    used here); 1-based POS; '+' or '-', indicating forward/reverse strand \
                    respectively (as per bit 0x10 of FLAG); CIGAR; MAPQ; `NM` tag value, which may \
                    be omitted (though the preceding comma must be retained).\n\nIn the presence \
                    of an existing `OA` tag, a subsequent tool may append another original \
                    alignment entry after the semicolon, adding to—rather than replacing—the \
                    existing `OA` information.\n\nThe `OA` field is designed to provide \
                    record-level information that can be useful for understanding the provenance \
                    of the information in a record. It is not designed to provide a complete \
                    history of the template alignment information. In particular, realignments \
                    resulting in the the removal of Secondary or Supplementary records will cause \
                    the loss of all tags associated with those records, and may also leave the \
                    `SA` tag in an invalid state.",
            },
            StandardTag::OC => Entry {
                code: "OC",
                value_type: Some(ValueType::String),
                summary: "Original CIGAR (deprecated; use OA instead).",
                format: Some("OC:Z:cigar"),
                details: "Original CIGAR, usually before realignment. Deprecated in favour of the \
                    more general `OA`.",
            },
            StandardTag::OP => Entry {
                code: "OP",
                value_type: Some(ValueType::Int),
                summary: "Original mapping position (deprecated; use OA instead).",
                format: Some("OP:i:pos"),
                details: "Original 1-based POS, usually before realignment. Deprecated in favour \
                    of the more general `OA`.",
            },
            StandardTag::OQ => Entry {
                code: "OQ",
                value_type: Some(ValueType::String),
                summary: "Original base quality.",
                format: Some("OQ:Z:qualities"),
                details: "Original base quality, usually before recalibration. Same encoding as \
                    QUAL.",
            },
            StandardTag::OX => Entry {
                code: "OX",
                value_type: Some(ValueType::String),
                summary: "Original unique molecular barcode bases.",
                format: Some("OX:Z:sequence+"),
                details: "Raw (uncorrected) unique molecular identifier bases, with any quality \
                    scores (optionally) stored in the `BZ` tag. In the case of multiple unique \
                    molecular identifiers (e.g., one on each end of the template) the recommended \
                    implementation concatenates all the barcodes with a hyphen ('-') between the \
                    different barcodes.",
            },
            StandardTag::PG => Entry {
                code: "PG",
                value_type: Some(ValueType::String),
                summary: "Program.",
                format: Some("PG:Z:program_id"),
                details: "Program. Value matches the header `PG-ID` tag if `@PG` is present.",
            },
            StandardTag::PQ => Entry {
                code: "PQ",
                value_type: Some(ValueType::Int),
                summary: "Phred likelihood of the template.",
                format: Some("PQ:i:score"),
                details: "Phred likelihood of the template, conditional on the mapping locations \
                    of both/all segments being correct.",
            },
            StandardTag::PT => Entry {
                code: "PT",
                value_type: Some(ValueType::String),
                summary: "Read annotations for parts of the padded read sequence.",
                format: Some("PT:Z:annotag(\\|annotag)*"),
                details: "where each _annotag_ matches \
                    _start_;_end_;_strand_;_type_(;_key_(=_value_)?)*: Read annotations for parts \
                    of the padded read sequence.\n\nThe `PT` tag value has the format of a series \
                    of annotation tags separated by '|', each annotating a sub-region of the read. \
                    Each tag consists of _start_, _end_, _strand_, _type_ and zero or more \
                    _key_=_value_ pairs, each separated with semicolons. Start and end are 1-based \
                    positions between one and the sum of the M/I/D/P/S/=/X CIGAR operators, i.e., \
                    SEQ length plus any pads. Note any editing of the CIGAR string may require \
                    updating the `PT` tag coordinates, or even invalidate them. As in GFF3, \
                    _strand_ is one of '+' for forward strand tags, '-' for reverse strand, '.' \
                    for unstranded or '?' for stranded but unknown strand.\n\nThe _type_ and any \
                    _keys_ and their optional _values_ are all percent encoded as in the `CT` tag.",
            },
            StandardTag::PU => Entry {
                code: "PU",
                value_type: Some(ValueType::String),
                summary: "Platform unit.",
                format: Some("PU:Z:platformunit"),
                details: "The platform unit in which the read was sequenced. If `@RG` headers are \
                    present, then _platformunit_ must match the `RG-PU` field of one of the \
                    headers.",
            },
            StandardTag::Q2 => Entry {
                code: "Q2",
                value_type: Some(ValueType::String),
                summary: "Phred quality of the mate/next segment sequence in the R2 tag.",
                format: Some("Q2:Z:qualities"),
                details: "Phred quality of the mate/next segment sequence in the `R2` tag. Same \
                    encoding as QUAL.",
            },
            StandardTag::QT => Entry {
                code: "QT",
                value_type: Some(ValueType::String),
                summary: "Phred quality of the sample barcode sequence in the BC tag.",
                format: Some("QT:Z:qualities"),
                details: "Phred quality of the sample barcode sequence in the `BC` tag. Same \
                    encoding as QUAL, i.e., Phred score + 33. In the case of multiple unique \
                    molecular identifiers (e.g., one on each end of the template) the recommended \
                    implementation concatenates all the quality strings with spaces (' ') between \
                    the different strings from the same template.",
            },
            StandardTag::QX => Entry {
                code: "QX",
                value_type: Some(ValueType::String),
                summary: "Quality score of the unique molecular identifier in the RX tag.",
                format: Some("QX:Z:qualities+"),
                details: "Phred quality of the unique molecular identifier sequence in the `RX` \
                    tag. Same encoding as QUAL, i.e., Phred score + 33. The qualities here may \
                    have been corrected (Raw bases and qualities can be stored in `OX` and `BZ` \
                    respectively.) The lengths of the `QX` and the `RX` tags must match. In the \
                    case of multiple unique molecular identifiers (e.g., one on each end of the \
                    template) the recommended implementation concatenates all the quality strings \
                    with a space (' ') between the different strings.",
            },
            StandardTag::R2 => Entry {
                code: "R2",
                value_type: Some(ValueType::String),
                summary: "Sequence of the mate/next segment in the template.",
                format: Some("R2:Z:bases"),
                details: "Sequence of the mate/next segment in the template. See also `Q2` for any \
                    associated quality values.",
            },
            StandardTag::RG => Entry {
                code: "RG",
                value_type: Some(ValueType::String),
                summary: "Read group.",
                format: Some("RG:Z:readgroup"),
                details: "The read group to which the read belongs. If `@RG` headers are present, \
                    then _readgroup_ must match the `RG-ID` field of one of the headers.",
            },
            StandardTag::RT => Entry {
                code: "RT",
                value_type: None,
                summary: "Reserved for backwards compatibility reasons.",
                format: None,
                details: "Reserved for backwards compatibility reasons.",
            },
            StandardTag::RX => Entry {
                code: "RX",
                value_type: Some(ValueType::String),
                summary: "Sequence bases of the (possibly corrected) unique molecular identifier.",
                format: Some("RX:Z:sequence+"),
                details: "Sequence bases from the unique molecular identifier. These could be \
                    either corrected or uncorrected. Unlike `MI`, the value may be non-unique in \
                    the file. Should be comprised of a sequence of bases. In the case of multiple \
                    unique molecular identifiers (e.g., one on each end of the template) the \
                    recommended implementation concatenates all the barcodes with a hyphen ('-') \
                    between the different barcodes.\n\nIf the bases represent corrected bases, the \
                    original sequence can be stored in `OX` (similar to `OQ` storing the original \
                    qualities of bases.)",
            },
            StandardTag::S2 => Entry {
                code: "S2",
                value_type: None,
                summary: "Reserved for backwards compatibility reasons.",
                format: None,
                details: "Reserved for backwards compatibility reasons.",
            },
            StandardTag::SA => Entry {
                code: "SA",
                value_type: Some(ValueType::String),
                summary: "Other canonical alignments in a chimeric alignment.",
                format: Some("SA:Z:(rname,pos,strand,CIGAR,mapQ,NM;)+"),
                details: "Other canonical alignments in a chimeric alignment, for- matted as a \
                    semicolon-delimited list. Each element in the list represents a part of the \
                    chimeric align- ment.  Conventionally, at a supplementary line, the first \
                    element points to the primary line.  _Strand_ is either '+' or '-', indicating \
                    forward/reverse strand, corresponding to FLAG bit 0x10. _Pos_ is a 1-based \
                    coordinate.",
            },
            StandardTag::SM => Entry {
                code: "SM",
                value_type: Some(ValueType::Int),
                summary: "Template-independent mapping quality.",
                format: Some("SM:i:score"),
                details: "Template-independent mapping quality, i.e., the mapping quality if the \
                    read were mapped as a single read rather than as part of a read pair or \
                    template.",
            },
            StandardTag::SQ => Entry {
                code: "SQ",
                value_type: None,
                summary: "Reserved for backwards compatibility reasons.",
                format: None,
                details: "Reserved for backwards compatibility reasons.",
            },
            StandardTag::TC => Entry {
                code: "TC",
                value_type: Some(ValueType::Int),
                summary: "The number of segments in the template.",
                format: Some("TC:i:count"),
                details: "The number of segments in the template.",
            },
            StandardTag::TS => Entry {
                code: "TS",
                value_type: Some(ValueType::Char),
                summary: "Transcript strand.",
                format: Some("TS:A:strand"),
                details: "Strand ('+' or '-') of the transcript to which the read has been mapped.",
            },
            StandardTag::U2 => Entry {
                code: "U2",
                value_type: Some(ValueType::String),
                summary: "Phred probability of the 2nd call being wrong conditional on the best \
                    being wrong.",
                format: Some("U2:Z:score"),
                details: "Phred probability of the 2nd call being wrong conditional on the best \
                    being wrong. The same encoding and length as QUAL. See also `E2` for \
                    associated base calls.",
            },
            StandardTag::UQ => Entry {
                code: "UQ",
                value_type: Some(ValueType::Int),
                summary: "Phred likelihood of the segment, conditional on the mapping being \
                    correct.",
                format: Some("UQ:i:score"),
                details: "Phred likelihood of the segment, conditional on the mapping being \
                    correct.",
            },
        }
    }
}

struct Entry {
    code: &'static str,
    value_type: Option<ValueType>,
    summary: &'static str,
    format: Option<&'static str>,
    details: &'static str,
}

impl fmt::Display for StandardTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for StandardTag {
    type Err = SamTagError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s).ok_or_else(|| SamTagError::UnknownStandardTag(s.to_string()))
    }
}

/// True if `code` is a predefined standard tag.
pub fn is_standard_tag(code: &str) -> bool {
    StandardTag::from_code(code).is_some()
}

/// The one-line description of a standard tag.
pub fn describe(code: &str) -> Result<&'static str> {
    code.parse::<StandardTag>().map(|tag| tag.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::is_valid_shape;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_sorted_and_unique() {
        let codes: Vec<&str> = StandardTag::ALL.iter().map(|t| t.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);

        let unique: HashSet<&str> = codes.iter().copied().collect();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn test_codes_match_variant_names() {
        for tag in StandardTag::ALL {
            assert_eq!(format!("{tag:?}"), tag.code());
        }
    }

    #[test]
    fn test_codes_are_valid_uppercase_tags() {
        for tag in StandardTag::ALL {
            assert!(is_valid_shape(tag.code()));
            assert!(!tag.code().chars().any(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(StandardTag::from_code("RG"), Some(StandardTag::RG));
        assert_eq!(StandardTag::from_code("rg"), None);
        assert_eq!(StandardTag::from_code("XG"), None);

        assert!(is_standard_tag("NM"));
        assert!(!is_standard_tag("nm"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe("RG").unwrap(), "Read group.");
        assert_eq!(describe("LB").unwrap(), "Library.");

        let err = describe("XG").unwrap_err();
        assert!(matches!(err, SamTagError::UnknownStandardTag(ref code) if code == "XG"));
    }

    #[test]
    fn test_format_and_details() {
        assert_eq!(StandardTag::AS.format(), Some("AS:i:score"));
        assert_eq!(StandardTag::AS.details(), "Alignment score generated by aligner.");
        assert_eq!(StandardTag::CG.format(), Some("CG:B:I,encodedCigar"));
        assert!(
            StandardTag::MD
                .details()
                .contains("\n* [A-Z], identifying a single reference base")
        );

        assert_eq!(StandardTag::GC.format(), None);
        assert_eq!(
            StandardTag::GC.details(),
            "Reserved for backwards compatibility reasons."
        );
    }

    #[test]
    fn test_format_lines_agree_with_value_types() {
        for tag in StandardTag::ALL {
            match (tag.format(), tag.value_type()) {
                (Some(format), Some(value_type)) => {
                    assert!(format.starts_with(&format!("{}:", tag.code())), "{tag}");
                    let declared = format.chars().nth(3).unwrap().to_ascii_uppercase();
                    assert_eq!(declared, value_type.code().to_ascii_uppercase(), "{tag}");
                }
                (None, None) => {}
                other => panic!("{tag}: inconsistent entry {other:?}"),
            }
        }
    }

    #[test]
    fn test_value_types() {
        assert_eq!(StandardTag::NM.value_type(), Some(ValueType::Int));
        assert_eq!(StandardTag::RG.value_type(), Some(ValueType::String));
        assert_eq!(StandardTag::TS.value_type(), Some(ValueType::Char));
        assert_eq!(StandardTag::ML.value_type(), Some(ValueType::Array));
        assert_eq!(StandardTag::GC.value_type(), None);

        assert!(StandardTag::SQ.is_reserved());
        assert!(!StandardTag::MD.is_reserved());
    }

    #[test]
    fn test_serde_uses_code() {
        assert_eq!(serde_json::to_string(&StandardTag::E2).unwrap(), "\"E2\"");
        assert_eq!(serde_json::to_string(&ValueType::Int).unwrap(), "\"i\"");
    }
}
