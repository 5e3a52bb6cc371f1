//! Constantes del motor de expansión.
//!
//! Nombres de predicados y clases del modelo destino (estilo CIDOC-CRM). El
//! motor los trata como cadenas opacas: no valida dominios ni rangos. Los
//! términos de vocabulario controlado (roles, tipos de apelación, tipos de
//! documento) no viven aquí sino en [`crate::vocabulary`], porque son
//! configurables.

/// Versión lógica del motor. Se expone en el listado del registro; cambiarla
/// no altera los identificadores acuñados.
pub const ENGINE_VERSION: &str = "N1.0";

/// Claves reservadas del registro.
pub const ID: &str = "id";
pub const ID_ALT: &str = "@id";
pub const TYPE: &str = "type";
pub const TYPE_ALT: &str = "@type";

/// Campo por defecto que contiene la colección dentro de un contenedor.
pub const DEFAULT_GRAPH_FIELD: &str = "@graph";

pub mod predicate {
    pub const IS_IDENTIFIED_BY: &str = "P1_is_identified_by";
    pub const HAS_TYPE: &str = "P2_has_type";
    pub const HAS_NOTE: &str = "P3_has_note";
    pub const HAS_TIME_SPAN: &str = "P4_has_time-span";
    pub const TOOK_PLACE_AT: &str = "P7_took_place_at";
    pub const CONSISTS_OF: &str = "P9_consists_of";
    pub const HAD_PARTICIPANT: &str = "P11_had_participant";
    pub const CARRIED_OUT_BY: &str = "P14_carried_out_by";
    pub const USED_SPECIFIC_OBJECT: &str = "P16_used_specific_object";
    pub const WAS_MOTIVATED_BY: &str = "P17_was_motivated_by";
    pub const TRANSFERRED_TITLE_TO: &str = "P22_transferred_title_to";
    pub const TRANSFERRED_TITLE_FROM: &str = "P23_transferred_title_from";
    pub const TRANSFERRED_TITLE_OF: &str = "P24_transferred_title_of";
    pub const HAS_DIMENSION: &str = "P43_has_dimension";
    pub const CONSISTS_OF_MATERIAL: &str = "P45_consists_of";
    pub const HAS_CURRENT_KEEPER: &str = "P50_has_current_keeper";
    pub const HAS_CURRENT_OWNER: &str = "P52_has_current_owner";
    pub const DEPICTS: &str = "P62_depicts";
    pub const REFERS_TO: &str = "P67_refers_to";
    pub const IS_REFERRED_TO_BY: &str = "P67i_is_referred_to_by";
    pub const DOCUMENTS: &str = "P70_documents";
    pub const HAS_LANGUAGE: &str = "P72_has_language";
    pub const AT_SOME_TIME_WITHIN: &str = "P82_at_some_time_within";
    pub const BEGIN_OF_THE_BEGIN: &str = "P82a_begin_of_the_begin";
    pub const END_OF_THE_END: &str = "P82b_end_of_the_end";
    pub const FALLS_WITHIN: &str = "P89_falls_within";
    pub const WAS_CREATED_BY: &str = "P94i_was_created_by";
    pub const BY_MOTHER: &str = "P96_by_mother";
    pub const FROM_FATHER: &str = "P97_from_father";
    pub const WAS_BORN: &str = "P98i_was_born";
    pub const DIED_IN: &str = "P100i_died_in";
    pub const HAS_TITLE: &str = "P102_has_title";
    pub const HAS_MEMBER: &str = "P107_has_current_or_former_member";
    pub const IS_MEMBER_OF: &str = "P107i_is_current_or_former_member_of";
    pub const IS_ABOUT: &str = "P129_is_about";
    pub const HAS_REPRESENTATION: &str = "P138i_has_representation";
    pub const HAD_SALES_PRICE: &str = "P179_had_sales_price";
    pub const HAS_CURRENCY: &str = "P180_has_currency";
    pub const HAS_AMOUNT: &str = "P181_has_amount";
    pub const HAS_SYMBOLIC_CONTENT: &str = "P190_has_symbolic_content";
}

pub mod class {
    pub const ENTITY: &str = "E1_CRM_Entity";
    pub const ACTIVITY: &str = "E7_Activity";
    pub const ACQUISITION: &str = "E8_Acquisition";
    pub const PERSON: &str = "E21_Person";
    pub const HUMAN_MADE_OBJECT: &str = "E22_Human-Made_Object";
    pub const RIGHT: &str = "E30_Right";
    pub const DOCUMENT: &str = "E31_Document";
    pub const LINGUISTIC_OBJECT: &str = "E33_Linguistic_Object";
    pub const TITLE: &str = "E35_Title";
    pub const VISUAL_ITEM: &str = "E36_Visual_Item";
    pub const ACTOR: &str = "E39_Actor";
    pub const APPELLATION: &str = "E41_Appellation";
    pub const IDENTIFIER: &str = "E42_Identifier";
    pub const TIME_SPAN: &str = "E52_Time-Span";
    pub const PLACE: &str = "E53_Place";
    pub const TYPE: &str = "E55_Type";
    pub const LANGUAGE: &str = "E56_Language";
    pub const MATERIAL: &str = "E57_Material";
    pub const CREATION: &str = "E65_Creation";
    pub const BIRTH: &str = "E67_Birth";
    pub const DEATH: &str = "E69_Death";
    pub const GROUP: &str = "E74_Group";
    pub const MONETARY_AMOUNT: &str = "E97_Monetary_Amount";
    pub const CURRENCY: &str = "E98_Currency";
}
