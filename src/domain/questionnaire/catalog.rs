//! The fixed diagnostic questionnaire.
//!
//! The catalog is the single source of truth for question order, prompts,
//! choice labels, and guided-classification mappings. The generator matches
//! rules against the question ids and choice labels defined here, so the two
//! must stay in sync.

use once_cell::sync::Lazy;

use super::question::{Question, SwotTag};

static DIAGNOSTIC: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        Question::free_text("company_name", "Qual é o nome da sua empresa?", "Empresa"),
        Question::single_choice(
            "team_size",
            "Quantas pessoas trabalham na empresa?",
            "Empresa",
            &["1-5", "6-20", "21-50", "Mais de 50"],
        ),
        Question::single_choice(
            "time_in_market",
            "Há quanto tempo a empresa está no mercado?",
            "Empresa",
            &["Menos de 1 ano", "1 a 3 anos", "3 a 10 anos", "Mais de 10 anos"],
        ),
        Question::single_choice(
            "growth_trend",
            "Como está o crescimento do faturamento nos últimos 12 meses?",
            "Empresa",
            &["Crescendo", "Estagnado", "Em queda"],
        ),
        Question::yes_no(
            "processes_documented",
            "Os processos principais da empresa estão documentados?",
            "Gestão",
        ),
        Question::yes_no(
            "quality_control",
            "Existe controle de qualidade sobre produtos ou serviços entregues?",
            "Gestão",
        ),
        Question::yes_no(
            "goals_defined",
            "A empresa possui metas definidas e comunicadas para a equipe?",
            "Gestão",
        ),
        Question::yes_no(
            "results_tracking",
            "Os resultados (vendas, custos, margem) são acompanhados mensalmente?",
            "Gestão",
        ),
        Question::yes_no(
            "management_system",
            "A empresa utiliza algum sistema de gestão (ERP/CRM)?",
            "Tecnologia",
        ),
        Question::yes_no(
            "team_training",
            "A equipe recebe treinamento regular?",
            "Pessoas",
        ),
        Question::guided(
            "marketing_plan",
            "Como você avalia o plano de marketing da empresa?",
            "Marketing",
            &[
                ("Estruturado e ativo", SwotTag::Strength),
                ("Existe mas não é seguido", SwotTag::Weakness),
                ("Inexistente", SwotTag::Weakness),
            ],
        ),
        Question::guided(
            "market_niche",
            "Existe um nicho de mercado ainda não explorado pela empresa?",
            "Mercado",
            &[
                ("Sim, já identificado", SwotTag::Opportunity),
                ("Talvez, precisa de pesquisa", SwotTag::Opportunity),
                ("Não enxergo nenhum", SwotTag::Threat),
            ],
        ),
        Question::guided(
            "team_quality",
            "Como você avalia a qualidade da sua equipe?",
            "Pessoas",
            &[
                ("Equipe forte e engajada", SwotTag::Strength),
                ("Equipe com lacunas importantes", SwotTag::Weakness),
            ],
        ),
        Question::guided(
            "cash_flow",
            "Como está o fluxo de caixa da empresa?",
            "Financeiro",
            &[
                ("Saudável e previsível", SwotTag::Strength),
                ("Aperto frequente", SwotTag::Weakness),
            ],
        ),
        Question::guided(
            "competition_pressure",
            "Como a concorrência afeta o seu negócio hoje?",
            "Mercado",
            &[
                ("Pressão forte de concorrentes", SwotTag::Threat),
                ("Concorrência irrelevante", SwotTag::Strength),
            ],
        ),
        Question::guided(
            "customer_loyalty",
            "Como está a fidelização dos seus clientes?",
            "Comercial",
            &[
                ("Clientes fiéis e recorrentes", SwotTag::Strength),
                ("Alta rotatividade de clientes", SwotTag::Weakness),
            ],
        ),
        Question::multi_choice(
            "main_challenges",
            "Quais são os principais desafios da empresa hoje?",
            "Empresa",
            &[
                "Vendas",
                "Gestão de pessoas",
                "Financeiro",
                "Marketing",
                "Operação",
                "Tecnologia",
            ],
        ),
        Question::free_text(
            "competitive_differentiator",
            "Qual é o principal diferencial competitivo da sua empresa?",
            "Estratégia",
        )
        .optional(),
    ]
});

/// Returns the fixed, ordered diagnostic questionnaire.
pub fn diagnostic_questions() -> &'static [Question] {
    &DIAGNOSTIC
}

/// Looks up a question in the diagnostic catalog by id.
pub fn question_by_id(id: &str) -> Option<&'static Question> {
    DIAGNOSTIC.iter().find(|q| q.id.as_str() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::question::InputKind;

    #[test]
    fn catalog_has_unique_ids() {
        let questions = diagnostic_questions();
        for (i, q) in questions.iter().enumerate() {
            assert!(
                !questions[i + 1..].iter().any(|other| other.id == q.id),
                "duplicate question id: {}",
                q.id
            );
        }
    }

    #[test]
    fn catalog_starts_with_company_name() {
        assert_eq!(diagnostic_questions()[0].id.as_str(), "company_name");
    }

    #[test]
    fn bracket_questions_carry_expected_labels() {
        let team = question_by_id("team_size").unwrap();
        assert!(team.choices.contains(&"1-5".to_string()));

        let market = question_by_id("time_in_market").unwrap();
        assert!(market.choices.contains(&"Menos de 1 ano".to_string()));

        let growth = question_by_id("growth_trend").unwrap();
        assert!(growth.choices.contains(&"Estagnado".to_string()));
    }

    #[test]
    fn gap_questions_are_yes_no() {
        for id in [
            "processes_documented",
            "quality_control",
            "goals_defined",
            "results_tracking",
            "management_system",
            "team_training",
        ] {
            let q = question_by_id(id).unwrap_or_else(|| panic!("missing question {}", id));
            assert_eq!(q.kind, InputKind::YesNo, "{} should be yes/no", id);
        }
    }

    #[test]
    fn guided_questions_map_every_choice() {
        for q in diagnostic_questions() {
            if q.kind == InputKind::GuidedClassification {
                for choice in &q.choices {
                    assert!(
                        q.resolve_tag(choice).is_some(),
                        "choice '{}' of {} has no tag",
                        choice,
                        q.id
                    );
                }
            }
        }
    }

    #[test]
    fn differentiator_is_optional() {
        let q = question_by_id("competitive_differentiator").unwrap();
        assert!(!q.required);
    }

    #[test]
    fn question_by_id_misses_unknown() {
        assert!(question_by_id("nonexistent").is_none());
    }
}
