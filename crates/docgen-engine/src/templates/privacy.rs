//! Política de Privacidade prose skeleton

use super::{contact_block, numbered_list};
use shared_types::DocumentRequest;

pub(crate) fn render(data: &DocumentRequest, updated: &str) -> String {
    let label = data.owner_type.tax_id_label();

    let mut doc = format!(
        "POLÍTICA DE PRIVACIDADE E PROTEÇÃO DE DADOS\n\
         \n\
         Última atualização: {updated}\n\
         \n\
         A {name}, {label} {tax_id}, está comprometida com a privacidade e a proteção dos dados pessoais de seus usuários, em conformidade com a Lei Geral de Proteção de Dados (LGPD - Lei 13.709/2018).\n\
         \n\
         1. INFORMAÇÕES GERAIS\n\
         \n\
         1.1. Esta Política de Privacidade descreve como coletamos, usamos, armazenamos e protegemos suas informações pessoais.\n\
         \n\
         1.2. Ao utilizar nossos serviços, você concorda com as práticas descritas nesta política.\n\
         \n\
         2. DEFINIÇÕES\n\
         \n\
         Para os fins desta Política:\n\
         - Dados Pessoais: informação relacionada a pessoa natural identificada ou identificável;\n\
         - Titular: pessoa natural a quem se referem os dados pessoais;\n\
         - Tratamento: toda operação realizada com dados pessoais;\n\
         - Controlador: {name};\n\
         - Encarregado (DPO): pessoa responsável pela proteção de dados, contato: {dpo}\n\
         \n\
         3. DADOS COLETADOS\n",
        updated = updated,
        name = data.legal_name,
        label = label,
        tax_id = data.tax_id,
        dpo = data.dpo_email,
    );

    if data.collected_data_types.is_empty() {
        doc.push_str(
            "\n3.1. Podemos coletar diferentes tipos de dados pessoais necessários para a prestação de nossos serviços.\n",
        );
    } else {
        doc.push_str(&format!(
            "\n3.1. Coletamos os seguintes tipos de dados pessoais:\n{}\n",
            numbered_list(&data.collected_data_types)
        ));
    }

    doc.push_str(&format!(
        "\n\
         3.2. Dados fornecidos diretamente:\n\
         \x20\x20\x20- Dados de cadastro (nome, e-mail, telefone)\n\
         \x20\x20\x20- Dados de pagamento\n\
         \x20\x20\x20- Comunicações com nosso suporte\n\
         \n\
         3.3. Dados coletados automaticamente:\n\
         \x20\x20\x20- Endereço IP\n\
         \x20\x20\x20- Tipo de navegador\n\
         \x20\x20\x20- Sistema operacional\n\
         \x20\x20\x20- Páginas visitadas\n\
         \x20\x20\x20- Tempo de acesso\n\
         \x20\x20\x20- Cookies e tecnologias similares\n\
         \n\
         4. FINALIDADE DO TRATAMENTO\n\
         \n\
         4.1. Utilizamos seus dados pessoais para:\n\
         \x20\x20\x20a) Prestar os serviços contratados;\n\
         \x20\x20\x20b) Processar pagamentos;\n\
         \x20\x20\x20c) Enviar comunicações sobre os serviços;\n\
         \x20\x20\x20d) Melhorar a experiência do usuário;\n\
         \x20\x20\x20e) Cumprir obrigações legais e regulatórias;\n\
         \x20\x20\x20f) Prevenir fraudes e garantir a segurança;\n\
         \x20\x20\x20g) Realizar análises estatísticas e de negócio.\n\
         \n\
         5. BASE LEGAL PARA O TRATAMENTO\n\
         \n\
         5.1. O tratamento de dados pessoais tem como base legal:\n\
         \x20\x20\x20a) Execução de contrato;\n\
         \x20\x20\x20b) Consentimento do titular;\n\
         \x20\x20\x20c) Cumprimento de obrigação legal ou regulatória;\n\
         \x20\x20\x20d) Exercício regular de direitos;\n\
         \x20\x20\x20e) Legítimo interesse do controlador;\n\
         \x20\x20\x20f) Proteção do crédito.\n\
         \n\
         6. COMPARTILHAMENTO DE DADOS\n\
         \n\
         6.1. Seus dados podem ser compartilhados com:\n\
         \x20\x20\x20- Prestadores de serviços (processamento de pagamentos, hospedagem, etc.);\n\
         \x20\x20\x20- Autoridades governamentais quando exigido por lei;\n\
         \x20\x20\x20- Parceiros comerciais, mediante seu consentimento.\n\
         \n\
         6.2. Não vendemos seus dados pessoais a terceiros.\n\
         \n\
         6.3. Exigimos que terceiros que acessam dados pessoais mantenham o mesmo nível de proteção.\n\
         \n\
         7. ARMAZENAMENTO E SEGURANÇA\n\
         \n\
         7.1. Implementamos medidas técnicas e organizacionais apropriadas para proteger seus dados contra acesso não autorizado, perda, destruição ou alteração.\n\
         \n\
         7.2. Medidas de segurança incluem:\n\
         \x20\x20\x20- Criptografia de dados sensíveis;\n\
         \x20\x20\x20- Controle de acesso restrito;\n\
         \x20\x20\x20- Monitoramento de segurança;\n\
         \x20\x20\x20- Backups regulares;\n\
         \x20\x20\x20- Treinamento de equipe.\n\
         \n\
         7.3. Seus dados são armazenados em servidores seguros localizados no Brasil e/ou em outros países que garantam nível adequado de proteção.\n\
         \n\
         8. RETENÇÃO DE DADOS\n\
         \n\
         8.1. Mantemos seus dados pessoais pelo tempo necessário para cumprir as finalidades para as quais foram coletados.\n\
         \n\
         8.2. Após o término da relação, os dados podem ser mantidos para:\n\
         \x20\x20\x20- Cumprimento de obrigações legais;\n\
         \x20\x20\x20- Exercício de direitos;\n\
         \x20\x20\x20- Fins estatísticos anonimizados.\n\
         \n\
         8.3. Dados anonimizados podem ser mantidos por tempo indeterminado para fins estatísticos.\n\
         \n\
         9. DIREITOS DO TITULAR\n\
         \n\
         9.1. Você tem direito a:\n\
         \x20\x20\x20a) Confirmar a existência de tratamento;\n\
         \x20\x20\x20b) Acessar seus dados;\n\
         \x20\x20\x20c) Corrigir dados incompletos, inexatos ou desatualizados;\n\
         \x20\x20\x20d) Anonimizar, bloquear ou eliminar dados desnecessários;\n\
         \x20\x20\x20e) Solicitar portabilidade dos dados;\n\
         \x20\x20\x20f) Eliminar dados tratados com consentimento;\n\
         \x20\x20\x20g) Obter informações sobre compartilhamento;\n\
         \x20\x20\x20h) Revogar consentimento;\n\
         \x20\x20\x20i) Opor-se ao tratamento em determinadas situações.\n\
         \n\
         9.2. Para exercer seus direitos, entre em contato com nosso DPO: {dpo}\n\
         \n\
         9.3. Responderemos às solicitações em até 15 dias.\n\
         \n\
         10. COOKIES E TECNOLOGIAS SIMILARES\n\
         \n\
         10.1. Utilizamos cookies para melhorar a experiência de navegação.\n\
         \n\
         10.2. Tipos de cookies utilizados:\n\
         \x20\x20\x20- Cookies essenciais (necessários para funcionamento);\n\
         \x20\x20\x20- Cookies de desempenho (análise de uso);\n\
         \x20\x20\x20- Cookies funcionais (preferências do usuário);\n\
         \x20\x20\x20- Cookies de marketing (publicidade direcionada).\n\
         \n\
         10.3. Você pode gerenciar cookies através das configurações do navegador.\n\
         \n\
         11. TRANSFERÊNCIA INTERNACIONAL DE DADOS\n\
         \n\
         11.1. Dados pessoais podem ser transferidos para outros países quando necessário para prestação dos serviços.\n\
         \n\
         11.2. Garantimos que tais transferências ocorram em conformidade com a LGPD e com adequadas salvaguardas.\n\
         \n\
         12. MENORES DE IDADE\n\
         \n\
         12.1. Nossos serviços não são direcionados a menores de 18 anos.\n\
         \n\
         12.2. Não coletamos intencionalmente dados de menores sem consentimento dos responsáveis.\n\
         \n\
         12.3. Se identificarmos coleta indevida, os dados serão prontamente excluídos.\n\
         \n\
         13. ALTERAÇÕES NA POLÍTICA\n\
         \n\
         13.1. Podemos atualizar esta Política periodicamente.\n\
         \n\
         13.2. Alterações significativas serão comunicadas através da plataforma ou por e-mail.\n\
         \n\
         13.3. Recomendamos revisar esta Política regularmente.\n\
         \n\
         14. ENCARREGADO DE DADOS (DPO)\n\
         \n\
         14.1. Nosso Encarregado de Proteção de Dados é responsável por:\n\
         \x20\x20\x20- Aceitar reclamações e comunicações;\n\
         \x20\x20\x20- Prestar esclarecimentos;\n\
         \x20\x20\x20- Adotar providências.\n\
         \n\
         14.2. Contato do DPO:\n\
         Email: {dpo}\n\
         \n\
         15. AUTORIDADE NACIONAL DE PROTEÇÃO DE DADOS (ANPD)\n\
         \n\
         15.1. Você tem direito de apresentar reclamação à ANPD sobre o tratamento de seus dados pessoais.\n\
         \n\
         15.2. Site da ANPD: https://www.gov.br/anpd\n\
         \n\
         16. CONTATO\n\
         \n\
         Para questões sobre esta Política de Privacidade:\n\
         \n\
         {name}\n\
         {label}: {tax_id}\n\
         {contact}\n\
         \n\
         DPO: {dpo}\n\
         \n\
         17. LEI APLICÁVEL\n\
         \n\
         17.1. Esta Política é regida pelas leis brasileiras, especialmente pela LGPD (Lei 13.709/2018).\n\
         \n\
         17.2. Foro: {city} - {region}\n\
         \n\
         ---\n\
         \n\
         Ao utilizar nossos serviços, você declara ter lido e compreendido esta Política de Privacidade.\n\
         \n\
         {name}\n\
         {label}: {tax_id}\n\
         Data: {updated}\n",
        updated = updated,
        name = data.legal_name,
        label = label,
        tax_id = data.tax_id,
        dpo = data.dpo_email,
        city = data.city,
        region = data.region,
        contact = contact_block(data),
    ));

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{DocumentKind, OwnerType};

    fn request(data_types: Vec<&str>) -> DocumentRequest {
        DocumentRequest {
            kind: DocumentKind::PrivacyPolicy,
            owner_type: OwnerType::Organization,
            legal_name: "Acme LTDA".to_string(),
            tax_id: "12345678000190".to_string(),
            service_description: "Plataforma digital.".to_string(),
            contact_email: "contato@acme.com".to_string(),
            contact_phone: "(11) 99999-8888".to_string(),
            website_url: Some("https://acme.com".to_string()),
            postal_address: "Av. Paulista, 1000".to_string(),
            city: "São Paulo".to_string(),
            region: "SP".to_string(),
            dpo_email: "dpo@acme.com".to_string(),
            selected_features: vec![],
            collected_data_types: data_types.into_iter().map(str::to_string).collect(),
        }
    }

    #[test]
    fn test_controller_and_dpo_in_definitions() {
        let doc = render(&request(vec![]), "6 de agosto de 2026");
        assert!(doc.contains("- Controlador: Acme LTDA;"));
        assert!(doc.contains("contato: dpo@acme.com"));
    }

    #[test]
    fn test_data_types_preserve_supplied_order() {
        let doc = render(&request(vec!["telefone", "email"]), "6 de agosto de 2026");
        let first = doc.find("   1) telefone").unwrap();
        let second = doc.find("   2) email").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_dpo_email_in_multiple_sections() {
        let doc = render(&request(vec![]), "6 de agosto de 2026");
        assert!(doc.matches("dpo@acme.com").count() >= 4);
    }

    #[test]
    fn test_forum_statement() {
        let doc = render(&request(vec![]), "6 de agosto de 2026");
        assert!(doc.contains("17.2. Foro: São Paulo - SP"));
    }

    #[test]
    fn test_anpd_section_present() {
        let doc = render(&request(vec![]), "6 de agosto de 2026");
        assert!(doc.contains("15.2. Site da ANPD: https://www.gov.br/anpd"));
    }

    #[test]
    fn test_footer_carries_date_stamp() {
        let doc = render(&request(vec![]), "6 de agosto de 2026");
        assert!(doc.ends_with("Data: 6 de agosto de 2026\n"));
    }
}
