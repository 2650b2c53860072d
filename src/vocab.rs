//! Static GenBank vocabularies and membership predicates
//!
//! The flat-file format encodes structure through keyword recognition, so the
//! parser's boundary decisions reduce to membership tests against these fixed
//! tables. They are immutable compile-time constants, never mutated at
//! runtime, and carry no parsing logic of their own. Callers may also use the
//! predicates for strict post-parse validation (e.g. checking that every
//! parsed feature type is a known one).

/// Three-letter GenBank division codes, as used on the LOCUS line
pub const GENBANK_DIVISIONS: &[&str] = &[
    "PRI", // primate sequences
    "ROD", // rodent sequences
    "MAM", // other mammalian sequences
    "VRT", // other vertebrate sequences
    "INV", // invertebrate sequences
    "PLN", // plant, fungal, and algal sequences
    "BCT", // bacterial sequences
    "VRL", // viral sequences
    "PHG", // bacteriophage sequences
    "SYN", // synthetic sequences
    "UNA", // unannotated sequences
    "EST", // expressed sequence tags
    "PAT", // patent sequences
    "STS", // sequence tagged sites
    "GSS", // genome survey sequences
    "HTG", // high-throughput genomic sequences
    "HTC", // unfinished high-throughput cDNA sequencing
    "ENV", // environmental sampling sequences
];

/// Keywords that start a top-level field (non-blank at column 1)
pub const TOP_LEVEL_KEYWORDS: &[&str] = &[
    "LOCUS",
    "DEFINITION",
    "ACCESSION",
    "VERSION",
    "KEYWORDS",
    "SOURCE",
    "REFERENCE",
    "FEATURES",
    "ORIGIN",
];

/// Keywords that start a nested sub-level field
pub const SUB_LEVEL_KEYWORDS: &[&str] = &[
    "ORGANISM",
    "AUTHORS",
    "TITLE",
    "JOURNAL",
    "PUBMED",
    "REMARK",
];

/// Feature types of the FEATURES table
pub const FEATURE_TYPES: &[&str] = &[
    "assembly_gap",
    "C_region",
    "CDS",
    "centromere",
    "D-loop",
    "D_segment",
    "exon",
    "gap",
    "gene",
    "iDNA",
    "intron",
    "J_segment",
    "mat_peptide",
    "misc_binding",
    "misc_difference",
    "misc_feature",
    "misc_recomb",
    "misc_RNA",
    "misc_structure",
    "mobile_element",
    "modified_base",
    "mRNA",
    "ncRNA",
    "N_region",
    "old_sequence",
    "operon",
    "oriT",
    "polyA_site",
    "precursor_RNA",
    "prim_transcript",
    "primer_bind",
    "propeptide",
    "protein_bind",
    "regulatory",
    "repeat_region",
    "rep_origin",
    "rRNA",
    "S_region",
    "sig_peptide",
    "source",
    "stem_loop",
    "STS",
    "telomere",
    "tmRNA",
    "transit_peptide",
    "tRNA",
    "unsure",
    "V_region",
    "V_segment",
    "variation",
    "3'UTR",
    "5'UTR",
];

/// Qualifier labels of the FEATURES table, without the `/` and `=` decoration
pub const QUALIFIER_NAMES: &[&str] = &[
    "allele",
    "altitude",
    "anticodon",
    "artificial_location",
    "bio_material",
    "bound_moiety",
    "cell_line",
    "cell_type",
    "chromosome",
    "citation",
    "clone",
    "clone_lib",
    "codon_start",
    "collected_by",
    "collection_date",
    "compare",
    "country",
    "cultivar",
    "culture_collection",
    "db_xref",
    "dev_stage",
    "direction",
    "EC_number",
    "ecotype",
    "environmental_sample",
    "estimated_length",
    "exception",
    "experiment",
    "focus",
    "frequency",
    "function",
    "gap_type",
    "gene",
    "gene_synonym",
    "germline",
    "haplogroup",
    "haplotype",
    "host",
    "identified_by",
    "inference",
    "isolate",
    "isolation_source",
    "lab_host",
    "lat_lon",
    "linkage_evidence",
    "locus_tag",
    "macronuclear",
    "map",
    "mating_type",
    "metagenome_source",
    "mobile_element_type",
    "mod_base",
    "mol_type",
    "ncRNA_class",
    "note",
    "number",
    "old_locus_tag",
    "operon",
    "organelle",
    "organism",
    "partial",
    "PCR_conditions",
    "PCR_primers",
    "phenotype",
    "plasmid",
    "pop_variant",
    "product",
    "protein_id",
    "proviral",
    "pseudo",
    "pseudogene",
    "rearranged",
    "replace",
    "ribosomal_slippage",
    "rpt_family",
    "rpt_type",
    "rpt_unit_range",
    "rpt_unit_seq",
    "satellite",
    "segment",
    "serotype",
    "serovar",
    "sex",
    "specimen_voucher",
    "standard_name",
    "strain",
    "sub_clone",
    "submitter_seqid",
    "sub_species",
    "sub_strain",
    "tag_peptide",
    "tissue_lib",
    "tissue_type",
    "transgenic",
    "translation",
    "transl_except",
    "transl_table",
    "trans_splicing",
    "type_material",
    "variety",
];

/// Check whether a token is a GenBank division code
pub fn is_division(token: &str) -> bool {
    GENBANK_DIVISIONS.contains(&token.trim())
}

/// Check whether a token is a top-level keyword (LOCUS, FEATURES, ...)
pub fn is_top_level_keyword(token: &str) -> bool {
    TOP_LEVEL_KEYWORDS.contains(&token.trim())
}

/// Check whether a token is a sub-level keyword (ORGANISM, AUTHORS, ...)
pub fn is_sub_level_keyword(token: &str) -> bool {
    SUB_LEVEL_KEYWORDS.contains(&token.trim())
}

/// Check whether a token is any recognized keyword, top-level or sub-level
///
/// This is the field-boundary test used by the continuation joiner.
pub fn is_keyword(token: &str) -> bool {
    is_top_level_keyword(token) || is_sub_level_keyword(token)
}

/// Check whether a token is a recognized feature type
pub fn is_feature_type(token: &str) -> bool {
    FEATURE_TYPES.contains(&token.trim())
}

/// Check whether a label is a recognized feature qualifier name
pub fn is_qualifier_name(label: &str) -> bool {
    QUALIFIER_NAMES.contains(&label.trim())
}
