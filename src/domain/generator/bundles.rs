//! Pre-authored action bundles keyed by diagnostic rule.
//!
//! All generation rules are data: the generator walks these tables and never
//! branches on question content directly. Question ids and bracket labels
//! must match the catalog in `domain::questionnaire::catalog`.

use crate::domain::plan::{Category, Priority};
use crate::domain::questionnaire::SwotTag;

/// Blueprint for one generated action.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ActionTemplate {
    pub description: &'static str,
    pub category: Category,
    pub priority: Priority,
    pub months: u32,
    pub owner: &'static str,
    pub resources: &'static str,
    pub metric: &'static str,
    pub benefit: &'static str,
}

const fn t(
    description: &'static str,
    category: Category,
    priority: Priority,
    months: u32,
    owner: &'static str,
    resources: &'static str,
    metric: &'static str,
    benefit: &'static str,
) -> ActionTemplate {
    ActionTemplate {
        description,
        category,
        priority,
        months,
        owner,
        resources,
        metric,
        benefit,
    }
}

/// Baseline actions that apply to every business regardless of answers.
pub(crate) static BASELINE: &[ActionTemplate] = &[
    t(
        "Implantar reunião semanal de alinhamento com pauta e atas registradas",
        Category::Management,
        Priority::High,
        1,
        "Gestor",
        "Agenda recorrente e modelo de ata",
        "Reuniões realizadas por mês",
        "Ritmo organizacional e decisões rastreáveis",
    ),
    t(
        "Definir e acompanhar os 5 indicadores-chave do negócio em um painel único",
        Category::Management,
        Priority::High,
        1,
        "Gestor",
        "Planilha ou painel de indicadores",
        "Painel atualizado semanalmente",
        "Visibilidade imediata do desempenho",
    ),
    t(
        "Criar plano de comunicação interna com canais e frequência definidos",
        Category::Culture,
        Priority::Medium,
        2,
        "Gestor",
        "Mural, grupo oficial e reunião mensal",
        "Pesquisa interna de clareza de comunicação",
        "Equipe alinhada com as prioridades",
    ),
    t(
        "Estruturar programa de capacitação contínua com trilha por função",
        Category::HumanResources,
        Priority::Medium,
        3,
        "RH",
        "Cursos online e treinamentos internos",
        "Horas de treinamento por colaborador",
        "Equipe mais qualificada e retida",
    ),
    t(
        "Implantar controle financeiro com fluxo de caixa projetado para 90 dias",
        Category::Finance,
        Priority::High,
        1,
        "Financeiro",
        "Planilha de fluxo de caixa ou sistema",
        "Fechamento mensal em até 5 dias úteis",
        "Previsibilidade financeira",
    ),
];

/// Remediation bundles for negative gap answers, keyed by question id.
pub(crate) static GAP_BUNDLES: &[(&str, &[ActionTemplate])] = &[
    (
        "processes_documented",
        &[
            t(
                "Mapear os 5 processos mais críticos da operação",
                Category::Operations,
                Priority::High,
                1,
                "Gestor",
                "Entrevistas com a equipe e fluxogramas",
                "Processos mapeados e validados",
                "Base para padronização e delegação",
            ),
            t(
                "Documentar procedimentos operacionais padrão dos processos mapeados",
                Category::Operations,
                Priority::High,
                2,
                "Gestor",
                "Modelo de POP e ferramenta de documentos",
                "POPs publicados e acessíveis",
                "Operação menos dependente de pessoas",
            ),
            t(
                "Treinar a equipe nos procedimentos documentados",
                Category::HumanResources,
                Priority::Medium,
                3,
                "RH",
                "Sessões práticas de treinamento",
                "Equipe avaliada nos novos POPs",
                "Execução consistente",
            ),
            t(
                "Estabelecer revisão trimestral dos processos documentados",
                Category::Management,
                Priority::Low,
                6,
                "Gestor",
                "Calendário de revisão",
                "Revisões realizadas no prazo",
                "Documentação sempre atual",
            ),
        ],
    ),
    (
        "quality_control",
        &[
            t(
                "Definir padrão de qualidade mínimo para cada produto ou serviço",
                Category::Operations,
                Priority::High,
                1,
                "Gestor",
                "Critérios objetivos por entrega",
                "Checklist de qualidade aprovado",
                "Expectativa clara de entrega",
            ),
            t(
                "Implantar checklist de conferência antes de cada entrega",
                Category::Operations,
                Priority::High,
                2,
                "Equipe",
                "Checklist impresso ou digital",
                "Percentual de entregas conferidas",
                "Menos retrabalho e devoluções",
            ),
            t(
                "Registrar e tratar reclamações de clientes em um canal único",
                Category::CustomerSuccess,
                Priority::Medium,
                2,
                "Comercial",
                "Planilha ou CRM de ocorrências",
                "Tempo médio de resposta a reclamações",
                "Recuperação de clientes insatisfeitos",
            ),
            t(
                "Medir indicador mensal de não conformidades",
                Category::Management,
                Priority::Medium,
                3,
                "Gestor",
                "Painel de indicadores",
                "Não conformidades por mês",
                "Qualidade gerenciada por dados",
            ),
        ],
    ),
    (
        "goals_defined",
        &[
            t(
                "Definir metas anuais desdobradas em trimestres",
                Category::Management,
                Priority::High,
                1,
                "Gestor",
                "Sessão de planejamento com sócios",
                "Metas escritas e aprovadas",
                "Direção clara para o ano",
            ),
            t(
                "Comunicar as metas para toda a equipe com responsáveis por meta",
                Category::Culture,
                Priority::High,
                1,
                "Gestor",
                "Reunião geral de lançamento",
                "Equipe sabe citar as metas",
                "Engajamento com o resultado",
            ),
            t(
                "Revisar o atingimento das metas mensalmente",
                Category::Management,
                Priority::Medium,
                2,
                "Gestor",
                "Reunião mensal de resultados",
                "Revisões mensais realizadas",
                "Correção de rota tempestiva",
            ),
        ],
    ),
    (
        "results_tracking",
        &[
            t(
                "Implantar fechamento mensal de vendas, custos e margem",
                Category::Finance,
                Priority::High,
                1,
                "Financeiro",
                "Planilha de fechamento mensal",
                "Fechamento disponível até dia 10",
                "Decisões baseadas em números reais",
            ),
            t(
                "Separar contas pessoais das contas da empresa",
                Category::Finance,
                Priority::High,
                1,
                "Sócios",
                "Conta bancária exclusiva e pró-labore",
                "Zero despesas pessoais no caixa da empresa",
                "Números confiáveis",
            ),
            t(
                "Comparar resultado realizado com meta a cada mês",
                Category::Management,
                Priority::Medium,
                3,
                "Gestor",
                "Relatório meta versus realizado",
                "Relatório emitido mensalmente",
                "Gestão orientada a desvios",
            ),
        ],
    ),
    (
        "management_system",
        &[
            t(
                "Levantar requisitos e selecionar um sistema de gestão adequado ao porte",
                Category::Technology,
                Priority::Medium,
                2,
                "Gestor",
                "Comparativo de 3 fornecedores",
                "Sistema escolhido e contratado",
                "Processos suportados por ferramenta",
            ),
            t(
                "Migrar cadastros de clientes e produtos para o sistema",
                Category::Technology,
                Priority::Medium,
                3,
                "Equipe",
                "Mutirão de migração de dados",
                "Cadastros completos no sistema",
                "Fim das planilhas paralelas",
            ),
            t(
                "Treinar a equipe no uso do sistema e desativar controles manuais",
                Category::Technology,
                Priority::Low,
                4,
                "Gestor",
                "Treinamento do fornecedor",
                "Operação 100% no sistema",
                "Informação centralizada",
            ),
        ],
    ),
    (
        "team_training",
        &[
            t(
                "Levantar as lacunas de competência de cada função",
                Category::HumanResources,
                Priority::Medium,
                1,
                "RH",
                "Avaliação simples por gestor",
                "Mapa de lacunas por pessoa",
                "Treinamento direcionado ao que falta",
            ),
            t(
                "Montar calendário trimestral de treinamentos prioritários",
                Category::HumanResources,
                Priority::Medium,
                2,
                "RH",
                "Cursos online e instrutores internos",
                "Treinamentos realizados por trimestre",
                "Evolução contínua da equipe",
            ),
            t(
                "Implantar integração padrão para novos colaboradores",
                Category::HumanResources,
                Priority::Low,
                3,
                "RH",
                "Roteiro de integração de 30 dias",
                "Novos colaboradores integrados no prazo",
                "Produtividade mais rápida de novatos",
            ),
        ],
    ),
];

/// Bundles keyed by (question id, classification tag).
pub(crate) static SWOT_BUNDLES: &[(&str, SwotTag, &[ActionTemplate])] = &[
    (
        "marketing_plan",
        SwotTag::Weakness,
        &[
            t(
                "Criar presença digital básica: perfil comercial e site de uma página",
                Category::Marketing,
                Priority::High,
                1,
                "Marketing",
                "Redes sociais e construtor de site",
                "Canais publicados e ativos",
                "Empresa encontrável por novos clientes",
            ),
            t(
                "Definir calendário editorial mensal com 2 publicações por semana",
                Category::Marketing,
                Priority::Medium,
                2,
                "Marketing",
                "Banco de ideias e ferramenta de agendamento",
                "Publicações realizadas por mês",
                "Audiência construída com constância",
            ),
            t(
                "Testar campanha paga local com orçamento controlado",
                Category::Marketing,
                Priority::Medium,
                3,
                "Marketing",
                "Verba mensal definida para mídia",
                "Custo por contato gerado",
                "Canal previsível de geração de demanda",
            ),
        ],
    ),
    (
        "marketing_plan",
        SwotTag::Strength,
        &[
            t(
                "Dobrar investimento nos canais de marketing com melhor retorno",
                Category::Marketing,
                Priority::Medium,
                2,
                "Marketing",
                "Análise de retorno por canal",
                "Retorno sobre investimento por canal",
                "Crescimento sobre o que já funciona",
            ),
            t(
                "Documentar o processo de marketing que funciona para escalar com equipe",
                Category::Marketing,
                Priority::Low,
                4,
                "Marketing",
                "Playbook de campanhas",
                "Playbook publicado",
                "Marketing independente de uma pessoa",
            ),
        ],
    ),
    (
        "market_niche",
        SwotTag::Opportunity,
        &[
            t(
                "Validar o nicho identificado com 10 entrevistas de potenciais clientes",
                Category::Commercial,
                Priority::High,
                2,
                "Comercial",
                "Roteiro de entrevista e lista de contatos",
                "Entrevistas realizadas e sintetizadas",
                "Decisão de entrada baseada em evidência",
            ),
            t(
                "Desenhar oferta piloto para o nicho e testar com 3 clientes",
                Category::Commercial,
                Priority::Medium,
                4,
                "Comercial",
                "Proposta piloto com preço de teste",
                "Vendas piloto fechadas",
                "Nova linha de receita validada",
            ),
        ],
    ),
    (
        "market_niche",
        SwotTag::Threat,
        &[
            t(
                "Mapear os 5 principais concorrentes e suas ofertas",
                Category::Commercial,
                Priority::Medium,
                2,
                "Gestor",
                "Pesquisa de mercado simples",
                "Quadro comparativo de concorrência",
                "Clareza sobre o campo competitivo",
            ),
            t(
                "Reforçar o posicionamento junto à base atual de clientes",
                Category::Commercial,
                Priority::Medium,
                3,
                "Comercial",
                "Campanha de relacionamento",
                "Taxa de recompra da base",
                "Defesa da receita existente",
            ),
        ],
    ),
    (
        "team_quality",
        SwotTag::Strength,
        &[
            t(
                "Criar plano de retenção para as pessoas-chave da equipe",
                Category::HumanResources,
                Priority::Medium,
                2,
                "RH",
                "Conversas de carreira e benefícios",
                "Rotatividade das pessoas-chave",
                "Proteção do principal ativo",
            ),
            t(
                "Delegar um processo completo para cada pessoa de confiança",
                Category::Management,
                Priority::Medium,
                3,
                "Gestor",
                "Matriz de delegação",
                "Processos delegados com autonomia",
                "Gestor liberado para estratégia",
            ),
        ],
    ),
    (
        "team_quality",
        SwotTag::Weakness,
        &[
            t(
                "Redesenhar o processo seletivo com critérios objetivos por vaga",
                Category::HumanResources,
                Priority::High,
                2,
                "RH",
                "Perfil de vaga e roteiro de entrevista",
                "Contratações aprovadas no período de experiência",
                "Menos erros de contratação",
            ),
            t(
                "Implantar avaliação de desempenho semestral com plano de desenvolvimento",
                Category::HumanResources,
                Priority::Medium,
                4,
                "RH",
                "Formulário de avaliação simples",
                "Avaliações concluídas por ciclo",
                "Evolução individual acompanhada",
            ),
            t(
                "Tratar os casos críticos de baixo desempenho com plano de 90 dias",
                Category::HumanResources,
                Priority::High,
                1,
                "Gestor",
                "Conversas estruturadas de feedback",
                "Casos críticos resolvidos",
                "Equipe nivelada por cima",
            ),
        ],
    ),
    (
        "cash_flow",
        SwotTag::Weakness,
        &[
            t(
                "Renegociar prazos com os 5 maiores fornecedores",
                Category::Finance,
                Priority::High,
                1,
                "Financeiro",
                "Histórico de compras e proposta de prazo",
                "Prazo médio de pagamento ampliado",
                "Alívio imediato no caixa",
            ),
            t(
                "Implantar régua de cobrança para reduzir inadimplência",
                Category::Finance,
                Priority::High,
                2,
                "Financeiro",
                "Sequência de lembretes automáticos",
                "Percentual de inadimplência",
                "Receita prevista entrando no prazo",
            ),
            t(
                "Construir reserva mínima equivalente a um mês de despesas",
                Category::Finance,
                Priority::Medium,
                6,
                "Financeiro",
                "Aporte mensal programado",
                "Reserva acumulada",
                "Fôlego para imprevistos",
            ),
        ],
    ),
    (
        "cash_flow",
        SwotTag::Strength,
        &[
            t(
                "Definir política de investimento do excedente de caixa",
                Category::Finance,
                Priority::Low,
                3,
                "Financeiro",
                "Análise de opções de baixo risco",
                "Rendimento do excedente",
                "Caixa parado passa a render",
            ),
            t(
                "Avaliar antecipação de compras estratégicas com desconto",
                Category::Finance,
                Priority::Low,
                4,
                "Financeiro",
                "Negociação com fornecedores à vista",
                "Desconto médio obtido",
                "Margem ampliada via poder de compra",
            ),
        ],
    ),
    (
        "competition_pressure",
        SwotTag::Threat,
        &[
            t(
                "Implantar monitoramento mensal de preços e ofertas dos concorrentes",
                Category::Commercial,
                Priority::Medium,
                2,
                "Comercial",
                "Planilha de monitoramento",
                "Relatório mensal de concorrência",
                "Reação rápida a movimentos do mercado",
            ),
            t(
                "Destacar o diferencial da empresa em toda comunicação comercial",
                Category::Marketing,
                Priority::Medium,
                2,
                "Marketing",
                "Revisão de materiais e propostas",
                "Materiais atualizados com o diferencial",
                "Comparação favorável na decisão do cliente",
            ),
        ],
    ),
    (
        "customer_loyalty",
        SwotTag::Weakness,
        &[
            t(
                "Implantar pesquisa de satisfação após cada entrega",
                Category::CustomerSuccess,
                Priority::High,
                1,
                "Comercial",
                "Formulário curto pós-venda",
                "Nota média de satisfação",
                "Causas de perda de clientes visíveis",
            ),
            t(
                "Criar rotina de contato proativo com clientes inativos há 90 dias",
                Category::CustomerSuccess,
                Priority::Medium,
                2,
                "Comercial",
                "Lista de inativos e roteiro de contato",
                "Clientes reativados por mês",
                "Receita recuperada da própria base",
            ),
            t(
                "Lançar benefício de recompra para clientes recorrentes",
                Category::Commercial,
                Priority::Medium,
                3,
                "Comercial",
                "Programa simples de vantagens",
                "Taxa de recompra",
                "Base fidelizada e previsível",
            ),
        ],
    ),
    (
        "customer_loyalty",
        SwotTag::Strength,
        &[
            t(
                "Estruturar programa de indicação com recompensa para clientes fiéis",
                Category::Commercial,
                Priority::Medium,
                2,
                "Comercial",
                "Regras e recompensa de indicação",
                "Novos clientes por indicação",
                "Aquisição de baixo custo",
            ),
            t(
                "Coletar e publicar depoimentos dos melhores clientes",
                Category::Marketing,
                Priority::Low,
                3,
                "Marketing",
                "Roteiro de depoimento e autorização",
                "Depoimentos publicados",
                "Prova social para novas vendas",
            ),
        ],
    ),
];

/// Bundles keyed by team-size bracket label.
pub(crate) static TEAM_SIZE_BUNDLES: &[(&str, &[ActionTemplate])] = &[
    (
        "1-5",
        &[
            t(
                "Definir papéis e responsabilidades por escrito mesmo com equipe enxuta",
                Category::Management,
                Priority::Medium,
                1,
                "Gestor",
                "Quadro simples de responsabilidades",
                "Cada função com dono definido",
                "Menos tarefas caindo no esquecimento",
            ),
            t(
                "Planejar a primeira contratação com base no gargalo atual",
                Category::HumanResources,
                Priority::Low,
                4,
                "Gestor",
                "Análise de carga de trabalho",
                "Vaga definida e orçada",
                "Crescimento sem sobrecarga",
            ),
        ],
    ),
    (
        "6-20",
        &[
            t(
                "Definir lideranças intermediárias para times acima de 5 pessoas",
                Category::Management,
                Priority::Medium,
                2,
                "Gestor",
                "Organograma e critérios de liderança",
                "Líderes nomeados por área",
                "Gestão próxima sem centralizar no dono",
            ),
            t(
                "Implantar rotina individual mensal entre líder e liderado",
                Category::HumanResources,
                Priority::Medium,
                3,
                "Líderes",
                "Roteiro de conversa individual",
                "Conversas realizadas por mês",
                "Problemas de equipe tratados cedo",
            ),
        ],
    ),
    (
        "21-50",
        &[
            t(
                "Formalizar organograma com alçadas de decisão por nível",
                Category::Management,
                Priority::Medium,
                2,
                "Gestor",
                "Sessão de desenho organizacional",
                "Organograma publicado",
                "Decisões no nível certo",
            ),
            t(
                "Estruturar área de RH dedicada com rotinas de pessoal",
                Category::HumanResources,
                Priority::Medium,
                4,
                "Sócios",
                "Contratação ou designação de RH",
                "Rotinas de RH funcionando",
                "Gente cuidada profissionalmente",
            ),
        ],
    ),
    (
        "Mais de 50",
        &[
            t(
                "Implantar ciclo formal de planejamento e orçamento anual",
                Category::Management,
                Priority::Medium,
                3,
                "Diretoria",
                "Calendário de planejamento",
                "Orçamento aprovado antes do ano",
                "Crescimento coordenado entre áreas",
            ),
            t(
                "Criar comitê de gestão com reuniões mensais de diretoria",
                Category::Management,
                Priority::Medium,
                2,
                "Diretoria",
                "Agenda e pauta executiva",
                "Comitês realizados por mês",
                "Alinhamento da alta gestão",
            ),
        ],
    ),
];

/// Bundles keyed by time-in-market bracket label.
pub(crate) static TIME_IN_MARKET_BUNDLES: &[(&str, &[ActionTemplate])] = &[
    (
        "Menos de 1 ano",
        &[
            t(
                "Validar o modelo de negócio com os 10 primeiros clientes pagantes",
                Category::Commercial,
                Priority::High,
                2,
                "Sócios",
                "Conversas diretas com clientes",
                "Clientes pagantes recorrentes",
                "Confirmação de que há mercado",
            ),
            t(
                "Formalizar o básico: contratos, emissão de notas e obrigações fiscais",
                Category::Finance,
                Priority::High,
                1,
                "Sócios",
                "Contador e modelos de contrato",
                "Operação regularizada",
                "Empresa protegida desde o início",
            ),
        ],
    ),
    (
        "1 a 3 anos",
        &[
            t(
                "Estabilizar a operação padronizando as entregas mais vendidas",
                Category::Operations,
                Priority::Medium,
                2,
                "Gestor",
                "Padrão de entrega por produto",
                "Variação de qualidade entre entregas",
                "Escala sem perder qualidade",
            ),
            t(
                "Construir previsão de vendas trimestral baseada no histórico",
                Category::Commercial,
                Priority::Medium,
                3,
                "Comercial",
                "Histórico de vendas organizado",
                "Desvio entre previsto e realizado",
                "Compras e caixa planejados",
            ),
        ],
    ),
    (
        "3 a 10 anos",
        &[
            t(
                "Revisar o portfólio descontinuando ofertas de baixa margem",
                Category::Commercial,
                Priority::Medium,
                3,
                "Gestor",
                "Análise de margem por oferta",
                "Margem média do portfólio",
                "Energia concentrada no que dá lucro",
            ),
            t(
                "Buscar uma nova fonte de receita complementar ao core",
                Category::Innovation,
                Priority::Low,
                6,
                "Sócios",
                "Estudo de adjacências do negócio",
                "Nova receita lançada",
                "Menos dependência de um único produto",
            ),
        ],
    ),
    (
        "Mais de 10 anos",
        &[
            t(
                "Modernizar a proposta de valor frente aos novos entrantes do mercado",
                Category::Innovation,
                Priority::Medium,
                4,
                "Sócios",
                "Pesquisa com clientes e benchmark",
                "Oferta revisada e lançada",
                "Relevância mantida após uma década",
            ),
            t(
                "Documentar o conhecimento crítico dos funcionários mais antigos",
                Category::Management,
                Priority::Medium,
                3,
                "Gestor",
                "Entrevistas e registros de know-how",
                "Conhecimento crítico documentado",
                "Memória da empresa protegida",
            ),
        ],
    ),
];

/// Bundles keyed by growth-trend bracket label.
pub(crate) static GROWTH_BUNDLES: &[(&str, &[ActionTemplate])] = &[
    (
        "Crescendo",
        &[
            t(
                "Garantir capital de giro para sustentar o ritmo de crescimento",
                Category::Finance,
                Priority::Medium,
                2,
                "Financeiro",
                "Projeção de necessidade de giro",
                "Giro disponível para 60 dias",
                "Crescimento sem sufocar o caixa",
            ),
            t(
                "Preparar a estrutura de atendimento para o aumento de demanda",
                Category::Operations,
                Priority::Medium,
                3,
                "Gestor",
                "Dimensionamento de capacidade",
                "Prazo de entrega mantido",
                "Crescer sem perder clientes por atraso",
            ),
        ],
    ),
    (
        "Estagnado",
        &[
            t(
                "Diagnosticar as 3 principais causas da estagnação com dados de vendas",
                Category::Commercial,
                Priority::High,
                1,
                "Gestor",
                "Análise de funil e base de clientes",
                "Causas priorizadas com plano",
                "Ação sobre a raiz, não o sintoma",
            ),
            t(
                "Lançar uma ofensiva comercial de 90 dias sobre a base existente",
                Category::Commercial,
                Priority::High,
                2,
                "Comercial",
                "Campanha para clientes atuais",
                "Receita incremental da campanha",
                "Retomada de crescimento no curto prazo",
            ),
        ],
    ),
    (
        "Em queda",
        &[
            t(
                "Cortar despesas não essenciais preservando a capacidade de venda",
                Category::Finance,
                Priority::High,
                1,
                "Financeiro",
                "Revisão linha a linha do orçamento",
                "Redução percentual de despesas fixas",
                "Sobrevivência com fôlego para reagir",
            ),
            t(
                "Entrevistar clientes perdidos para entender a causa da queda",
                Category::Commercial,
                Priority::High,
                1,
                "Comercial",
                "Roteiro de entrevista de saída",
                "Entrevistas concluídas e sintetizadas",
                "Causa real da perda identificada",
            ),
        ],
    ),
];

/// Domain-agnostic filler actions appended up to the generation cap.
pub(crate) static UNIVERSAL: &[ActionTemplate] = &[
    t(
        "Implantar programa de bem-estar e prevenção de esgotamento da equipe",
        Category::HumanResources,
        Priority::Low,
        4,
        "RH",
        "Pesquisa de clima e ações simples",
        "Índice de clima organizacional",
        "Equipe saudável produz mais",
    ),
    t(
        "Iniciar plano de sucessão para as posições críticas",
        Category::Management,
        Priority::Low,
        6,
        "Sócios",
        "Mapa de posições críticas",
        "Sucessores identificados por posição",
        "Continuidade do negócio garantida",
    ),
    t(
        "Avaliar os fornecedores atuais e negociar contratos anuais",
        Category::Operations,
        Priority::Low,
        4,
        "Gestor",
        "Quadro de avaliação de fornecedores",
        "Economia obtida em contratos",
        "Fornecimento estável e mais barato",
    ),
    t(
        "Criar rotina trimestral de inteligência competitiva",
        Category::Commercial,
        Priority::Low,
        5,
        "Comercial",
        "Fontes públicas e visitas de mercado",
        "Relatório trimestral de mercado",
        "Surpresas do mercado antecipadas",
    ),
    t(
        "Implantar rotina de sucesso do cliente nos 30 dias após a venda",
        Category::CustomerSuccess,
        Priority::Medium,
        3,
        "Comercial",
        "Roteiro de acompanhamento pós-venda",
        "Clientes acompanhados no primeiro mês",
        "Clientes com valor percebido desde o início",
    ),
    t(
        "Revisar a precificação com base em custo real e valor percebido",
        Category::Finance,
        Priority::Medium,
        3,
        "Financeiro",
        "Planilha de formação de preço",
        "Margem média por oferta",
        "Preço sustentando o crescimento",
    ),
    t(
        "Organizar a base de contatos comerciais em um funil único",
        Category::Commercial,
        Priority::Medium,
        2,
        "Comercial",
        "CRM ou planilha de funil",
        "Oportunidades registradas no funil",
        "Nenhuma oportunidade esquecida",
    ),
    t(
        "Padronizar a proposta comercial com prazo de validade e follow-up",
        Category::Commercial,
        Priority::Low,
        3,
        "Comercial",
        "Modelo de proposta revisado",
        "Taxa de conversão de propostas",
        "Vendas fechando mais rápido",
    ),
    t(
        "Mapear riscos operacionais e definir plano de contingência básico",
        Category::Operations,
        Priority::Low,
        6,
        "Gestor",
        "Matriz simples de riscos",
        "Riscos críticos com contingência",
        "Operação resiliente a imprevistos",
    ),
    t(
        "Implantar backup e segurança mínima dos dados da empresa",
        Category::Technology,
        Priority::Medium,
        2,
        "Gestor",
        "Backup em nuvem e senhas gerenciadas",
        "Backup testado mensalmente",
        "Dados protegidos contra perda",
    ),
    t(
        "Criar ritual mensal de reconhecimento de resultados da equipe",
        Category::Culture,
        Priority::Low,
        2,
        "Gestor",
        "Reunião mensal de resultados",
        "Rituais realizados por mês",
        "Time motivado por conquistas visíveis",
    ),
    t(
        "Estabelecer parceria com outra empresa para indicação mútua de clientes",
        Category::Commercial,
        Priority::Low,
        5,
        "Sócios",
        "Acordo simples de parceria",
        "Clientes recebidos por parceria",
        "Canal novo de aquisição",
    ),
    t(
        "Automatizar uma tarefa repetitiva por trimestre",
        Category::Technology,
        Priority::Low,
        6,
        "Equipe",
        "Lista de tarefas repetitivas",
        "Horas economizadas por mês",
        "Equipe focada no que gera valor",
    ),
    t(
        "Documentar a jornada do cliente do primeiro contato ao pós-venda",
        Category::CustomerSuccess,
        Priority::Low,
        4,
        "Comercial",
        "Mapeamento da jornada atual",
        "Jornada documentada com pontos de atrito",
        "Experiência melhorada ponta a ponta",
    ),
    t(
        "Definir política clara de descontos e alçadas de negociação",
        Category::Commercial,
        Priority::Low,
        3,
        "Gestor",
        "Tabela de descontos por volume",
        "Desconto médio concedido",
        "Margem protegida nas negociações",
    ),
    t(
        "Realizar inventário completo e implantar controle de estoque mínimo",
        Category::Operations,
        Priority::Medium,
        3,
        "Equipe",
        "Contagem e ficha de estoque",
        "Acuracidade do estoque",
        "Capital parado reduzido",
    ),
    t(
        "Criar apresentação institucional padrão da empresa",
        Category::Marketing,
        Priority::Low,
        2,
        "Marketing",
        "Modelo de apresentação",
        "Apresentação em uso pelo comercial",
        "Imagem profissional e consistente",
    ),
    t(
        "Agendar planejamento estratégico anual com todos os sócios",
        Category::Management,
        Priority::Low,
        6,
        "Sócios",
        "Facilitador e agenda fechada",
        "Planejamento realizado e registrado",
        "Visão de longo prazo compartilhada",
    ),
];

/// Single fallback action when no competitive differentiator was informed.
pub(crate) static VALUE_PROPOSITION: ActionTemplate = t(
    "Definir a proposta de valor da empresa: por que o cliente deve escolher você",
    Category::Commercial,
    Priority::High,
    1,
    "Sócios",
    "Workshop de posicionamento",
    "Proposta de valor escrita e validada",
    "Diferencial claro em toda comunicação",
);
