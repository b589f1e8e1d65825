use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::config;
use crate::hooks::use_revealed;

/// (icon, title, description)
pub type CardContent = (Icon, &'static str, &'static str);

pub const MODEL_CARDS: &[CardContent] = &[
    (
        Icon::Building,
        "Multilojas",
        "Nossos franqueados crescem conosco. Mais de 40% da rede é composta por franqueados com mais de uma unidade.",
    ),
    (
        Icon::Globe,
        "Expansão Internacional",
        "Presença consolidada no Brasil e operações em crescimento na Europa (Portugal), provando a força da marca.",
    ),
    (
        Icon::Users,
        "Academy Própria",
        "Formamos nossos próprios instrutores através da Pure Pilates Academy, garantindo qualidade técnica e reposição ágil.",
    ),
];

pub const DIFFERENTIALS: &[CardContent] = &[
    (
        Icon::Smartphone,
        "App Exclusivo de Gestão",
        "Tecnologia proprietária para agendamentos, pagamentos e gestão financeira. O aluno agenda pelo app, você gerencia com um clique.",
    ),
    (
        Icon::Award,
        "Marca Líder",
        "Reconhecimento de mercado que atrai alunos organicamente. Ser Pure Pilates é sinônimo de qualidade técnica.",
    ),
    (
        Icon::Team,
        "Suporte Operacional",
        "Equipe de consultores de campo dedicada a analisar seus KPIs e sugerir melhorias constantes de performance.",
    ),
    (
        Icon::GraduationCap,
        "Universidade Corporativa",
        "Treinamento contínuo para recepcionistas, gestores e instrutores através de nossa plataforma EAD.",
    ),
    (
        Icon::LineChart,
        "Marketing Digital Centralizado",
        "Estratégias de tráfego pago e branding geridas pela franqueadora para gerar leads qualificados para sua unidade.",
    ),
    (
        Icon::CheckCircle,
        "Implantação Chave na Mão",
        "Suporte completo na escolha do ponto, projeto arquitetônico e negociação com fornecedores homologados.",
    ),
];

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub desc: AttrValue,
}

#[function_component(ModelCard)]
pub fn model_card(props: &CardProps) -> Html {
    html! {
        <div class="model-card">
            <div class="model-card-icon">
                <IconSvg icon={props.icon} size={28} />
            </div>
            <h4>{ props.title.clone() }</h4>
            <p>{ props.desc.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DifferentialCardProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub desc: AttrValue,
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(DifferentialCard)]
pub fn differential_card(props: &DifferentialCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_revealed(node.clone(), props.delay_ms);

    html! {
        <div ref={node} class={classes!("differential-card", revealed.then(|| "visible"))}>
            <div class="differential-card-icon">
                <IconSvg icon={props.icon} size={28} />
            </div>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.desc.clone() }</p>
        </div>
    }
}

#[function_component(ModelGrid)]
pub fn model_grid() -> Html {
    html! {
        <div class="model-grid">
            {
                MODEL_CARDS.iter().map(|(icon, title, desc)| html! {
                    <ModelCard key={*title} icon={*icon} title={*title} desc={*desc} />
                }).collect::<Html>()
            }
        </div>
    }
}

#[function_component(DifferentialsSection)]
pub fn differentials_section() -> Html {
    html! {
        <div class="container">
            <div class="differentials-grid">
                {
                    DIFFERENTIALS.iter().enumerate().map(|(index, (icon, title, desc))| html! {
                        <DifferentialCard
                            key={*title}
                            icon={*icon}
                            title={*title}
                            desc={*desc}
                            delay_ms={config::reveal_delay_ms(index)}
                        />
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
