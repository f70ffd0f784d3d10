//! Decorative page content
//!
//! Every page receives its items from this registry at setup time instead of
//! discovering them on its own. The content is static sample data; nothing
//! here is persisted or computed.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    pub title: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceItem {
    pub class_name: String,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizCard {
    pub title: String,
    pub subject: String,
    pub questions: u32,
    pub class_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCard {
    pub name: String,
    pub students: u32,
    pub average: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportItem {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumSummary {
    pub description: String,
    pub open_questions: u32,
    pub answered_this_week: u32,
    pub recent_topics: Vec<String>,
}

/// All decorative content, grouped by the page that shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCatalog {
    pub metrics: Vec<MetricCard>,
    pub activities: Vec<ActivityItem>,
    pub performance: Vec<PerformanceItem>,
    pub quizzes: Vec<QuizCard>,
    pub classes: Vec<ClassCard>,
    pub reports: Vec<ReportItem>,
    pub forum: ForumSummary,
}

fn metric(label: &str, value: &str) -> MetricCard {
    MetricCard {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn activity(title: &str, status: &str) -> ActivityItem {
    ActivityItem {
        title: title.to_string(),
        status: status.to_string(),
    }
}

fn performance(class_name: &str, score: &str) -> PerformanceItem {
    PerformanceItem {
        class_name: class_name.to_string(),
        score: score.to_string(),
    }
}

fn quiz(title: &str, subject: &str, questions: u32, class_name: &str) -> QuizCard {
    QuizCard {
        title: title.to_string(),
        subject: subject.to_string(),
        questions,
        class_name: class_name.to_string(),
    }
}

fn class(name: &str, students: u32, average: &str) -> ClassCard {
    ClassCard {
        name: name.to_string(),
        students,
        average: average.to_string(),
    }
}

fn report(name: &str, description: &str) -> ReportItem {
    ReportItem {
        name: name.to_string(),
        description: description.to_string(),
    }
}

impl PageCatalog {
    /// Sample content shown by the dashboard
    pub fn demo() -> Self {
        Self {
            metrics: vec![
                metric("Alunos", "248"),
                metric("Turmas", "8"),
                metric("Quizzes ativos", "12"),
                metric("Média geral", "7,8"),
            ],
            activities: vec![
                activity("Quiz de Frações", "Concluído"),
                activity("Revisão de Verbos", "Em andamento"),
                activity("Sistema Solar", "Pendente"),
            ],
            performance: vec![
                performance("7º Ano A", "85%"),
                performance("8º Ano B", "78%"),
                performance("9º Ano A", "91%"),
            ],
            quizzes: vec![
                quiz("Quiz de Frações", "Matemática", 10, "7º Ano A"),
                quiz("Revisão de Verbos", "Português", 15, "8º Ano B"),
                quiz("Sistema Solar", "Ciências", 12, "9º Ano A"),
                quiz("Brasil Colônia", "História", 8, "8º Ano B"),
            ],
            classes: vec![
                class("7º Ano A", 32, "8,5"),
                class("8º Ano B", 29, "7,8"),
                class("9º Ano A", 31, "9,1"),
            ],
            reports: vec![
                report(
                    "Relatório de Desempenho",
                    "Notas e evolução por turma no bimestre",
                ),
                report(
                    "Relatório de Participação",
                    "Quizzes respondidos e pendentes por aluno",
                ),
                report(
                    "Relatório de Frequência",
                    "Presença consolidada das turmas",
                ),
            ],
            forum: ForumSummary {
                description: "Espaço de dúvidas e discussões entre professores e alunos."
                    .to_string(),
                open_questions: 14,
                answered_this_week: 37,
                recent_topics: vec![
                    "Como simplificar frações com números grandes?".to_string(),
                    "Dúvida sobre o pretérito mais-que-perfeito".to_string(),
                    "Por que Plutão deixou de ser planeta?".to_string(),
                ],
            },
        }
    }
}
